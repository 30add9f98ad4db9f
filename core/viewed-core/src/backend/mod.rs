//! Session storage backends.
//!
//! A backend is a flat string-to-string map whose lifetime is one browsing
//! session, the same contract as `window.sessionStorage`. The store encodes
//! viewed sets on top of it; backends never interpret values.
//!
//! # Module Structure
//!
//! - [`memory`]: In-process map, used by tests and embedders
//! - [`file`]: One JSON file per browsing session (the CLI's backend)
//! - `browser`: `window.sessionStorage` (feature `browser`, wasm32 only)
//!
//! Backends are used from a single UI thread and are not `Send`.

mod file;
mod memory;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
mod browser;

pub use file::FileBackend;
pub use memory::MemoryBackend;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub use browser::BrowserBackend;

use crate::error::Result;

pub trait SessionBackend {
    /// Returns the raw value under `key`, or `None` if never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key` in one write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;

    /// Ends the browsing session: every key is dropped.
    fn clear(&self) -> Result<()>;
}
