//! Durable client-side session cache.
//!
//! Holds the current session token and user snapshot between runs. The
//! cache is deliberately dumb: the server is the only authority on whether
//! a session is still live, so consumers must validate before trusting
//! anything loaded from here (see [`super::api::AuthClient::restore`]).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PublicUser;

/// Session file name in the cache directory
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSession {
    pub session_id: String,
    pub user: PublicUser,
    pub saved_at: DateTime<Utc>,
}

impl CachedSession {
    pub fn new(session_id: String, user: PublicUser) -> Self {
        Self {
            session_id,
            user,
            saved_at: Utc::now(),
        }
    }
}

/// On-disk holder of the current session. An explicit object handed to
/// callers, never a process-wide singleton.
pub struct SessionCache {
    cache_dir: PathBuf,
    pub data: Option<CachedSession>,
}

impl SessionCache {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            data: None,
        }
    }

    /// Cache under the platform cache directory.
    pub fn with_default_dir() -> Result<Self> {
        let dir = dirs::cache_dir()
            .context("No cache directory available")?
            .join("admin-dashboard");
        Ok(Self::new(dir))
    }

    /// Load the cached session from disk. Returns whether one was found.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: CachedSession =
                serde_json::from_str(&contents).context("Failed to parse session file")?;
            self.data = Some(data);
            return Ok(true);
        }
        Ok(false)
    }

    /// Save the current session to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents)?;
        }
        Ok(())
    }

    /// Forget the session, in memory and on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Replace the cached session.
    pub fn update(&mut self, data: CachedSession) {
        self.data = Some(data);
    }

    /// The cached session token, if any. Absence of a token means
    /// immediately unauthenticated.
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.session_id.as_str())
    }

    fn session_path(&self) -> PathBuf {
        self.cache_dir.join(SESSION_FILE)
    }
}
