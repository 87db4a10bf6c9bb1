//! Session state persistence
//!
//! Remembers the username of the last signed in user between runs.
//! Stored in `~/.config/cinema/session.toml`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionData {
    pub username: Option<String>,
}

/// Complete session with metadata
///
/// A session without a backing path lives in memory only; `save` is then a
/// no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
            path: None,
        }
    }
}

impl Session {
    /// Load the session from the config directory, or start a fresh one
    pub fn load() -> Self {
        match paths::session_path() {
            Ok(path) => Self::load_or_default(path),
            Err(e) => {
                log::warn!("No session directory available: {}", e);
                Self::in_memory()
            }
        }
    }

    /// A session that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from a specific path; a missing or broken file yields an empty
    /// session bound to that path
    pub fn load_or_default(path: PathBuf) -> Self {
        if path.exists() {
            match Self::load_from_path(&path) {
                Ok(mut session) => {
                    log::info!("Loaded session from {:?}", path);
                    session.path = Some(path);
                    return session;
                }
                Err(e) => log::warn!("Ignoring unreadable session: {:#}", e),
            }
        }

        log::info!("No existing session found, using defaults");
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Persist the session if it is bound to a file
    pub fn save(&mut self) -> Result<()> {
        self.meta.last_modified = Utc::now();

        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    pub fn username(&self) -> Option<&str> {
        self.session.username.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.session.username = Some(username.into());
    }

    pub fn clear_username(&mut self) {
        self.session.username = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.meta.version, SESSION_VERSION);
        assert!(session.username().is_none());
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let mut session = Session::in_memory();
        session.set_username("trinity");
        session.save().unwrap();
        assert_eq!(session.username(), Some("trinity"));
    }

    #[test]
    fn test_session_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let mut session = Session::load_or_default(path.clone());
        assert!(session.username().is_none());
        session.set_username("neo");
        session.save().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[meta]"));
        assert!(content.contains("[session]"));

        let mut reloaded = Session::load_or_default(path.clone());
        assert_eq!(reloaded.username(), Some("neo"));

        reloaded.clear_username();
        reloaded.save().unwrap();
        assert!(Session::load_or_default(path).username().is_none());
    }

    #[test]
    fn test_broken_file_yields_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "this is not toml [").unwrap();

        let session = Session::load_or_default(path);
        assert!(session.username().is_none());
    }
}
