//! Error types for viewed-core operations.
//!
//! Store callers normally never see these: `SessionViewStore::get` and
//! `SessionViewStore::set` absorb them. They surface through the fallible
//! `read`/`record` forms and the backends.

use std::path::PathBuf;

/// All errors that can occur in viewed-core operations.
#[derive(Debug, thiserror::Error)]
pub enum ViewedError {
    // ─────────────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Session storage backend unavailable")]
    BackendUnavailable,

    #[error("Session storage rejected operation: {0}")]
    BackendRejected(String),

    // ─────────────────────────────────────────────────────────────────────
    // Data Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Stored value for category {category:?} is malformed: {details}")]
    Malformed { category: String, details: String },

    // ─────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Session file path has no parent directory: {0}")]
    InvalidSessionPath(PathBuf),

    // ─────────────────────────────────────────────────────────────────────
    // I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ViewedError {
    /// True for the expected "no storage here" case, which is logged quieter
    /// than real failures.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ViewedError::BackendUnavailable)
    }
}

/// Convenience type alias for Results using ViewedError.
pub type Result<T> = std::result::Result<T, ViewedError>;
