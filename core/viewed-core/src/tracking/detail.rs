use tracing::debug;

use super::TrackingContext;
use crate::content::ContentItem;
use crate::types::Tracking;

/// Viewed state for one mounted detail view.
///
/// Behaves like an effect with dependencies `(identity, tracking)`: each
/// [`sync`](Self::sync) with a changed pair runs the protocol once, an
/// unchanged pair does nothing.
///
/// 1. read the category's viewed set
/// 2. commit `was_viewed` as the visible flag
/// 3. if recording, queue the write; it never runs inside `sync`
///
/// A missing identity skips both read and write and leaves the flag as is.
#[derive(Debug)]
pub struct DetailViewTracker {
    context: TrackingContext,
    category: String,
    tracking: Tracking,
    is_viewed: bool,
    last_deps: Option<(Option<String>, Tracking)>,
}

impl DetailViewTracker {
    pub fn mount(context: &TrackingContext, category: &str, tracking: Tracking) -> Self {
        DetailViewTracker {
            context: context.clone(),
            category: category.to_string(),
            tracking,
            is_viewed: false,
            last_deps: None,
        }
    }

    pub fn is_viewed(&self) -> bool {
        self.is_viewed
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tracking(&self) -> Tracking {
        self.tracking
    }

    /// Changes the tracking mode. Takes effect on the next `sync`.
    pub fn set_tracking(&mut self, tracking: Tracking) {
        self.tracking = tracking;
    }

    pub fn sync_item(&mut self, item: &ContentItem) -> bool {
        self.sync(item.view_key())
    }

    /// Runs the protocol for `identity` if it or the tracking mode changed
    /// since the last run. Returns the committed flag.
    pub fn sync(&mut self, identity: Option<&str>) -> bool {
        let identity = identity.filter(|id| !id.is_empty());
        let deps = (identity.map(str::to_string), self.tracking);
        if self.last_deps.as_ref() == Some(&deps) {
            return self.is_viewed;
        }
        self.last_deps = Some(deps);

        let Some(identity) = identity else {
            return self.is_viewed;
        };

        let was_viewed = self.context.store().get(&self.category).contains(identity);
        self.is_viewed = was_viewed;

        if self.tracking.records() {
            let store = self.context.store().clone();
            let category = self.category.clone();
            let key = identity.to_string();
            self.context
                .queue()
                .defer(move || store.set(&category, &key));
        }

        debug!(
            category = %self.category,
            identity,
            was_viewed,
            tracking = ?self.tracking,
            "Detail view synced"
        );
        was_viewed
    }
}
