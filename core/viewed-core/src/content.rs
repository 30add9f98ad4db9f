//! Content items as handed over by the CMS layer.

use serde::{Deserialize, Serialize};

/// A blog post / article summary.
///
/// Every field is optional because live-preview content arrives partially
/// filled in. The tracking key is the CMS entry id, which survives title
/// edits and can't collide between two posts with the same title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
}

impl ContentItem {
    pub fn new(id: &str) -> Self {
        ContentItem {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn with_short_description(mut self, description: &str) -> Self {
        self.short_description = Some(description.to_string());
        self
    }

    /// Identity used for viewed tracking. `None` until the entry id is loaded.
    pub fn view_key(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_key_is_entry_id() {
        let item = ContentItem::new("entry-1").with_title("Hello");
        assert_eq!(item.view_key(), Some("entry-1"));
    }

    #[test]
    fn test_view_key_missing_or_empty_id_is_none() {
        assert_eq!(ContentItem::default().with_title("Hello").view_key(), None);
        assert_eq!(ContentItem::new("").view_key(), None);
    }

    #[test]
    fn test_deserializes_camel_case_with_missing_fields() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id":"e1","shortDescription":"Intro"}"#).unwrap();
        assert_eq!(item.id.as_deref(), Some("e1"));
        assert_eq!(item.short_description.as_deref(), Some("Intro"));
        assert_eq!(item.title, None);
    }
}
