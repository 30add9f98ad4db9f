use std::cell::RefCell;
use std::collections::HashMap;

use super::SessionBackend;
use crate::error::Result;

/// In-memory session storage. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get_item("article").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let backend = MemoryBackend::new();
        backend.set_item("article", r#"["a"]"#).unwrap();
        assert_eq!(
            backend.get_item("article").unwrap().as_deref(),
            Some(r#"["a"]"#)
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let backend = MemoryBackend::new();
        backend.set_item("article", "a").unwrap();
        backend.set_item("project", "b").unwrap();

        backend.remove_item("article").unwrap();
        assert_eq!(backend.len(), 1);

        backend.clear().unwrap();
        assert!(backend.is_empty());
    }
}
