//! Session configuration and path management.
//!
//! `SessionConfig` decides where file-backed browsing sessions live and which
//! session the current process belongs to. Production code uses
//! [`SessionConfig::from_env`]; tests use [`SessionConfig::with_root`] with a
//! temp directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViewedError};

/// Overrides the data root (default `~/.viewed`).
pub const HOME_ENV: &str = "VIEWED_HOME";
/// Selects the browsing session (default [`DEFAULT_SESSION_ID`]).
pub const SESSION_ENV: &str = "VIEWED_SESSION";
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Root directory for all data (default: ~/.viewed)
    root: PathBuf,
    /// Sanitized browsing session id
    session_id: String,
}

impl SessionConfig {
    /// Resolves root and session id from `VIEWED_HOME` / `VIEWED_SESSION`,
    /// falling back to `~/.viewed` and the default session.
    pub fn from_env() -> Result<Self> {
        let root = match env::var_os(HOME_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => dirs::home_dir()
                .ok_or(ViewedError::HomeDirNotFound)?
                .join(".viewed"),
        };
        let session_id = env::var(SESSION_ENV).unwrap_or_default();
        Ok(Self::with_root(root, &session_id))
    }

    /// Creates a config with a custom root directory.
    /// An empty session id selects the default session.
    pub fn with_root(root: PathBuf, session_id: &str) -> Self {
        Self {
            root,
            session_id: Self::sanitize_session_id(session_id),
        }
    }

    pub fn with_session(mut self, session_id: &str) -> Self {
        self.session_id = Self::sanitize_session_id(session_id);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Paths
    // ─────────────────────────────────────────────────────────────────────────────

    /// Path to sessions/ directory (one file per browsing session).
    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("sessions")
    }

    /// Path to the current session's file.
    /// Example: ~/.viewed/sessions/default.json
    pub fn session_file(&self) -> PathBuf {
        self.sessions_dir().join(format!("{}.json", self.session_id))
    }

    /// Path to logs/ directory.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// Ensures the root directory and standard subdirectories exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.sessions_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// Maps a session id onto a safe file stem.
    /// Keeps ASCII alphanumerics, `-` and `_`; everything else becomes `-`.
    fn sanitize_session_id(session_id: &str) -> String {
        let trimmed = session_id.trim();
        if trimmed.is_empty() {
            return DEFAULT_SESSION_ID.to_string();
        }
        trimmed
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_root_uses_custom_root() {
        let temp = TempDir::new().unwrap();
        let config = SessionConfig::with_root(temp.path().to_path_buf(), "tab-1");
        assert_eq!(config.root(), temp.path());
        assert_eq!(config.session_id(), "tab-1");
    }

    #[test]
    fn test_session_file_lives_under_sessions_dir() {
        let config = SessionConfig::with_root(PathBuf::from("/data"), "tab-1");
        assert_eq!(config.sessions_dir(), PathBuf::from("/data/sessions"));
        assert_eq!(
            config.session_file(),
            PathBuf::from("/data/sessions/tab-1.json")
        );
        assert_eq!(config.logs_dir(), PathBuf::from("/data/logs"));
    }

    #[test]
    fn test_empty_session_id_falls_back_to_default() {
        let config = SessionConfig::with_root(PathBuf::from("/data"), "  ");
        assert_eq!(config.session_id(), DEFAULT_SESSION_ID);
    }

    #[test]
    fn test_session_id_is_sanitized_for_file_names() {
        let config = SessionConfig::with_root(PathBuf::from("/data"), "../tab 1/x");
        assert_eq!(config.session_id(), "---tab-1-x");
        assert_eq!(
            config.session_file(),
            PathBuf::from("/data/sessions/---tab-1-x.json")
        );
    }

    #[test]
    fn test_with_session_replaces_session_id() {
        let config = SessionConfig::with_root(PathBuf::from("/data"), "a").with_session("b");
        assert_eq!(config.session_id(), "b");
    }

    #[test]
    fn test_ensure_dirs_creates_structure() {
        let temp = TempDir::new().unwrap();
        let config = SessionConfig::with_root(temp.path().join("root"), "s");
        config.ensure_dirs().unwrap();

        assert!(config.root().exists());
        assert!(config.sessions_dir().exists());
        assert!(config.logs_dir().exists());
    }
}
