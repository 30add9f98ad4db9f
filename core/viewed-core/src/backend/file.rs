//! File-backed browsing session.
//!
//! Each browsing session is one JSON file (`~/.viewed/sessions/<id>.json`).
//! Separate processes act like page navigations within the same tab: every
//! call re-reads the file, so there is no in-process cache to go stale.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "created_at": "2026-10-15T09:00:00Z",
//!   "updated_at": "2026-10-15T09:05:00Z",
//!   "entries": { "article": "[\"entry-1\"]" }
//! }
//! ```
//!
//! Entry values are raw strings exactly as a `sessionStorage` would hold them.
//!
//! # Defensive Design
//!
//! - Missing file: empty session
//! - Empty file, corrupt JSON, unsupported version: empty session, logged;
//!   the next write replaces the file
//!
//! # Atomic Writes
//!
//! Uses temp file + rename so a reader never sees a partial file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::SessionBackend;
use crate::config::SessionConfig;
use crate::error::{Result, ViewedError};

const SESSION_FILE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    /// Schema version. We only load files with version == 1.
    version: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Storage key → raw value.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl SessionFile {
    fn new() -> Self {
        let now = Utc::now();
        SessionFile {
            version: SESSION_FILE_VERSION,
            created_at: now,
            updated_at: now,
            entries: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileBackend {
    file_path: PathBuf,
}

impl FileBackend {
    pub fn new(file_path: &Path) -> Self {
        FileBackend {
            file_path: file_path.to_path_buf(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.session_file())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the session file. `None` means "no usable session yet".
    fn load(&self) -> Result<Option<SessionFile>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ViewedError::Io {
                    context: "reading session file".to_string(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            warn!(path = %self.file_path.display(), "Empty session file, treating as new session");
            return Ok(None);
        }

        match serde_json::from_str::<SessionFile>(&content) {
            Ok(file) if file.version == SESSION_FILE_VERSION => Ok(Some(file)),
            Ok(file) => {
                warn!(
                    path = %self.file_path.display(),
                    version = file.version,
                    expected = SESSION_FILE_VERSION,
                    "Unsupported session file version, treating as new session"
                );
                Ok(None)
            }
            Err(e) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "Failed to parse session file, treating as new session"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, file: &SessionFile) -> Result<()> {
        let content = serde_json::to_string_pretty(file).map_err(|source| ViewedError::Json {
            context: "serializing session file".to_string(),
            source,
        })?;

        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| ViewedError::InvalidSessionPath(self.file_path.clone()))?;
        fs::create_dir_all(parent_dir).map_err(|source| io_error("creating sessions dir", source))?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)
            .map_err(|source| io_error("creating temp session file", source))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|source| io_error("writing temp session file", source))?;
        temp_file
            .flush()
            .map_err(|source| io_error("flushing temp session file", source))?;
        temp_file
            .persist(&self.file_path)
            .map_err(|e| io_error("replacing session file", e.error))?;

        Ok(())
    }

    fn modify(&self, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut file = self.load()?.unwrap_or_else(SessionFile::new);
        apply(&mut file.entries);
        file.updated_at = Utc::now();
        self.save(&file)
    }
}

impl SessionBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .load()?
            .and_then(|mut file| file.entries.remove(key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => {
                debug!(path = %self.file_path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(io_error("removing session file", source)),
        }
    }
}

fn io_error(context: &str, source: std::io::Error) -> ViewedError {
    ViewedError::Io {
        context: context.to_string(),
        source,
    }
}
