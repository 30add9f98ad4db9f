//! Session view store: namespaced, deduplicated "viewed" membership.
//!
//! [`SessionViewStore`] is a cheap cloneable handle over a session backend.
//! Every consumer gets a handle passed in; all handles cloned from the same
//! store share one backend, so a write through one is visible to the next
//! read through any other. Nothing is cached and nobody is notified of
//! writes: consumers re-read when they mount.
//!
//! # Failure Policy
//!
//! Tracking is an enhancement, so the infallible pair never fails:
//!
//! - [`get`](SessionViewStore::get) returns the empty set when the backend is
//!   missing, errors, or holds a malformed value.
//! - [`set`](SessionViewStore::set) treats unreadable or malformed contents as
//!   empty and overwrites them, healing the stored value.
//!
//! [`read`](SessionViewStore::read) and [`record`](SessionViewStore::record)
//! are the same operations with the error kept.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::backend::{FileBackend, MemoryBackend, SessionBackend};
use crate::codec;
use crate::config::SessionConfig;
use crate::error::{Result, ViewedError};
use crate::types::{RecordOutcome, ViewedSet};

#[derive(Clone)]
pub struct SessionViewStore {
    /// `None` when no storage exists in this execution context.
    backend: Option<Rc<dyn SessionBackend>>,
}

impl SessionViewStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self::from_rc(Rc::new(backend))
    }

    /// Wraps an already shared backend, e.g. one a test also inspects directly.
    pub fn from_rc(backend: Rc<dyn SessionBackend>) -> Self {
        SessionViewStore {
            backend: Some(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// A store with no backend: reads are empty, writes are dropped.
    pub fn unavailable() -> Self {
        SessionViewStore { backend: None }
    }

    /// Opens the file-backed session selected by `config`.
    pub fn open(config: &SessionConfig) -> Self {
        Self::new(FileBackend::from_config(config))
    }

    /// Opens `window.sessionStorage`, or an unavailable store outside a window.
    #[cfg(all(feature = "browser", target_arch = "wasm32"))]
    pub fn browser() -> Self {
        match crate::backend::BrowserBackend::from_window() {
            Some(backend) => Self::new(backend),
            None => Self::unavailable(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> Result<&dyn SessionBackend> {
        self.backend
            .as_deref()
            .ok_or(ViewedError::BackendUnavailable)
    }

    /// Reads the viewed set for `category`, keeping any failure.
    pub fn read(&self, category: &str) -> Result<ViewedSet> {
        match self.backend()?.get_item(category)? {
            Some(raw) => codec::decode(category, &raw),
            None => Ok(ViewedSet::new()),
        }
    }

    /// Reads the viewed set for `category`; any failure reads as empty.
    pub fn get(&self, category: &str) -> ViewedSet {
        self.read(category).unwrap_or_else(|e| {
            log_absorbed(category, "read", &e);
            ViewedSet::new()
        })
    }

    /// Records `item` as viewed in `category`.
    ///
    /// Empty items are skipped without touching the backend. An item already
    /// present issues no write. Unreadable or malformed prior contents are
    /// treated as empty; only a missing backend or a failed write is an error.
    pub fn record(&self, category: &str, item: &str) -> Result<RecordOutcome> {
        if item.is_empty() {
            return Ok(RecordOutcome::Skipped);
        }

        let backend = self.backend()?;
        let existing = backend.get_item(category).and_then(|raw| match raw {
            Some(raw) => codec::decode(category, &raw),
            None => Ok(ViewedSet::new()),
        });
        let mut set = existing.unwrap_or_else(|e| {
            warn!(category, error = %e, "Discarding unreadable viewed set before write");
            ViewedSet::new()
        });

        if !set.insert(item) {
            return Ok(RecordOutcome::AlreadyPresent);
        }

        backend.set_item(category, &codec::encode(&set)?)?;
        debug!(category, item, count = set.len(), "Recorded viewed item");
        Ok(RecordOutcome::Inserted)
    }

    /// Records `item` as viewed in `category`; failures are logged only.
    pub fn set(&self, category: &str, item: &str) {
        if let Err(e) = self.record(category, item) {
            log_absorbed(category, "write", &e);
        }
    }

    /// Ends the browsing session, dropping every category.
    pub fn end_session(&self) -> Result<()> {
        self.backend()?.clear()
    }
}

impl fmt::Debug for SessionViewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionViewStore")
            .field("available", &self.is_available())
            .finish()
    }
}

fn log_absorbed(category: &str, operation: &str, err: &ViewedError) {
    if err.is_unavailable() {
        debug!(category, operation, "Session storage unavailable");
    } else {
        warn!(category, operation, error = %err, "Viewed store operation failed");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// pageViewed call surface
// ─────────────────────────────────────────────────────────────────────────────

/// One call on the page-viewed surface used by presentational components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageViewed<'a> {
    Get { category: &'a str },
    Set { category: &'a str, item: Option<&'a str> },
}

impl<'a> PageViewed<'a> {
    /// Builds a call from an operation name (`"get"` or `"set"`).
    pub fn parse(operation: &str, category: &'a str, item: Option<&'a str>) -> Option<Self> {
        match operation {
            "get" => Some(PageViewed::Get { category }),
            "set" => Some(PageViewed::Set { category, item }),
            _ => None,
        }
    }
}

/// Runs a page-viewed call.
///
/// `Get` returns `None` only when the store has no backend; `Set` always
/// returns `None`.
pub fn page_viewed(store: &SessionViewStore, call: PageViewed<'_>) -> Option<Vec<String>> {
    match call {
        PageViewed::Get { category } => {
            if !store.is_available() {
                return None;
            }
            Some(store.get(category).into_vec())
        }
        PageViewed::Set { category, item } => {
            if let Some(item) = item {
                store.set(category, item);
            }
            None
        }
    }
}
