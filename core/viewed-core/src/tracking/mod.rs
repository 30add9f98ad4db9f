//! View-state protocols for content components.
//!
//! ```text
//! SessionViewStore ⇄ DetailViewTracker (reads, then defers its write)
//!                  → GridView          (reads once, never writes)
//!                        ↓ is_viewed
//!                     render::*         (pure markup)
//! ```
//!
//! # Ordering
//!
//! A detail view's flag reflects the store as it was *before* the current
//! visit. The tracker reads and commits the flag synchronously inside
//! [`DetailViewTracker::sync`] and only then queues its write on the
//! [`DeferredQueue`], so the read can never observe its own write. A grid
//! mounted while that write is still queued sees the item as unviewed; one
//! mounted after the queue drains sees it as viewed.
//!
//! # Module Structure
//!
//! - [`detail`]: reader/writer protocol for a single item's full view
//! - [`grid`]: batch reader for tile lists

mod detail;
mod grid;

pub use detail::DetailViewTracker;
pub use grid::{GridView, Tile};

use crate::scheduler::DeferredQueue;
use crate::store::SessionViewStore;
use crate::types::Tracking;

/// Handles every tracking component needs: the shared store and the event
/// loop's deferred queue.
#[derive(Debug, Clone)]
pub struct TrackingContext {
    store: SessionViewStore,
    queue: DeferredQueue,
}

impl TrackingContext {
    pub fn new(store: SessionViewStore, queue: DeferredQueue) -> Self {
        TrackingContext { store, queue }
    }

    pub fn store(&self) -> &SessionViewStore {
        &self.store
    }

    pub fn queue(&self) -> &DeferredQueue {
        &self.queue
    }

    /// Mounts a detail view tracker for `category`.
    pub fn detail_view(&self, category: &str, tracking: Tracking) -> DetailViewTracker {
        DetailViewTracker::mount(self, category, tracking)
    }

    /// Mounts a grid view for `category`, reading the store now.
    pub fn grid_view(&self, category: &str) -> GridView {
        GridView::mount(&self.store, category)
    }
}
