use tracing::debug;

use crate::content::ContentItem;
use crate::store::SessionViewStore;
use crate::types::ViewedSet;

/// One tile's input to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    pub item: &'a ContentItem,
    pub is_viewed: bool,
}

/// Viewed state for a mounted list of tiles.
///
/// Reads the whole set once at mount; later writes by detail views are not
/// picked up until the grid is mounted again. Never writes.
#[derive(Debug, Clone)]
pub struct GridView {
    category: String,
    viewed: ViewedSet,
}

impl GridView {
    pub fn mount(store: &SessionViewStore, category: &str) -> Self {
        let viewed = store.get(category);
        debug!(category, count = viewed.len(), "Grid view loaded viewed set");
        GridView {
            category: category.to_string(),
            viewed,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn viewed(&self) -> &ViewedSet {
        &self.viewed
    }

    /// Items without an identity are never viewed.
    pub fn is_viewed(&self, identity: Option<&str>) -> bool {
        identity.is_some_and(|id| self.viewed.contains(id))
    }

    /// Pairs each present item with its flag, skipping unresolved entries.
    pub fn tiles<'a>(&self, items: &'a [Option<ContentItem>]) -> Vec<Tile<'a>> {
        items
            .iter()
            .flatten()
            .map(|item| Tile {
                item,
                is_viewed: self.is_viewed(item.view_key()),
            })
            .collect()
    }
}
