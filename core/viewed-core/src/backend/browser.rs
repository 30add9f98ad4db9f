//! `window.sessionStorage` backend.
//!
//! Only built for wasm32 with the `browser` feature. Outside a window context
//! (workers, server rendering) [`BrowserBackend::from_window`] returns `None`
//! and the store runs unavailable.

use web_sys::Storage;

use super::SessionBackend;
use crate::error::{Result, ViewedError};

pub struct BrowserBackend {
    storage: Storage,
}

impl BrowserBackend {
    pub fn from_window() -> Option<Self> {
        let storage = web_sys::window()?.session_storage().ok()??;
        Some(BrowserBackend { storage })
    }
}

fn rejected(operation: &str, err: impl std::fmt::Debug) -> ViewedError {
    ViewedError::BackendRejected(format!("{operation}: {err:?}"))
}

impl SessionBackend for BrowserBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| rejected("getItem", e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // Quota errors land here
        self.storage
            .set_item(key, value)
            .map_err(|e| rejected("setItem", e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| rejected("removeItem", e))
    }

    fn clear(&self) -> Result<()> {
        self.storage.clear().map_err(|e| rejected("clear", e))
    }
}
