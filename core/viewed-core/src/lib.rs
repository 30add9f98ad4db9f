//! # viewed-core
//!
//! Session-scoped "you've already read this" tracking for content views.
//!
//! ## Design Principles
//!
//! - **Synchronous, single-threaded**: mirrors a UI event loop. Handles are
//!   `Rc`-based and not `Send`; embedders provide their own synchronization.
//! - **Graceful degradation**: missing storage, I/O failures and corrupt
//!   values read as "nothing viewed", never as errors to the end user.
//! - **Explicit handles**: components get a [`SessionViewStore`] passed in
//!   instead of reaching for a global, so tests substitute an in-memory one.
//! - **Read before write**: a detail view paints the state from before its
//!   own visit; its write is always deferred.
//!
//! ## Quick Start
//!
//! ```rust
//! use viewed_core::{DeferredQueue, SessionViewStore, Tracking, TrackingContext, ARTICLE_CATEGORY};
//!
//! let ctx = TrackingContext::new(SessionViewStore::in_memory(), DeferredQueue::new());
//!
//! let mut hero = ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record);
//! assert!(!hero.sync(Some("entry-1")));
//! ctx.queue().run_until_idle();
//!
//! let grid = ctx.grid_view(ARTICLE_CATEGORY);
//! assert!(grid.is_viewed(Some("entry-1")));
//! ```

pub mod backend;
pub mod codec;
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod store;
pub mod tracking;
pub mod types;

pub use backend::{FileBackend, MemoryBackend, SessionBackend};
pub use config::SessionConfig;
pub use content::ContentItem;
pub use error::{Result, ViewedError};
pub use render::{render_hero, render_tile, HeroLayout};
pub use scheduler::DeferredQueue;
pub use store::{page_viewed, PageViewed, SessionViewStore};
pub use tracking::{DetailViewTracker, GridView, Tile, TrackingContext};
pub use types::*;
