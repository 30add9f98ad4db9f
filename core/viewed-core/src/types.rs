//! Shared types for viewed-item tracking.

use serde::{Deserialize, Serialize};

/// Category used by the article detail and grid views.
pub const ARTICLE_CATEGORY: &str = "article";

/// Ordered, deduplicated identities recorded as viewed within one category.
///
/// Order is first appearance. It is kept so the stored value stays stable
/// across rewrites, but callers should only ever ask about membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ViewedSet {
    items: Vec<String>,
}

impl ViewedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    /// Appends `item` unless it is empty or already present.
    /// Returns true when the set changed.
    pub fn insert(&mut self, item: &str) -> bool {
        if item.is_empty() || self.contains(item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl FromIterator<String> for ViewedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = ViewedSet::new();
        for item in iter {
            if !item.is_empty() && !set.contains(&item) {
                set.items.push(item);
            }
        }
        set
    }
}

impl From<Vec<String>> for ViewedSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ViewedSet> for Vec<String> {
    fn from(set: ViewedSet) -> Self {
        set.items
    }
}

/// Whether a detail view records its visit.
///
/// Embedded previews of an item (e.g. a hero on the home page) use
/// `Suppressed` so showing them does not count as reading the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tracking {
    #[default]
    Record,
    Suppressed,
}

impl Tracking {
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            Tracking::Suppressed
        } else {
            Tracking::Record
        }
    }

    pub fn records(self) -> bool {
        self == Tracking::Record
    }
}

/// Result of a fallible store write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The item was appended and the set written back.
    Inserted,
    /// The item was already recorded; nothing was written.
    AlreadyPresent,
    /// The item was empty; nothing was read or written.
    Skipped,
}
