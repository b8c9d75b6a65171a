//! Session persistence
//!
//! The server keeps login state in cookies. A browser keeps those between
//! page loads; here the jar's `Cookie` header is written to a small JSON
//! file and replayed into the jar of the next process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::cookie::{CookieStore, Jar};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

/// On-disk form of a saved session
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    base_url: String,
    cookies: String,
}

/// Reads and writes the session file for one base URL
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    base_url: Url,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>, base_url: Url) -> Self {
        Self {
            path: path.into(),
            base_url,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a jar pre-loaded with the saved cookies, if any.
    ///
    /// A session saved for a different base URL is ignored.
    pub fn load(&self) -> Result<Arc<Jar>> {
        let jar = Arc::new(Jar::default());
        let Some(header) = self.read_header()? else {
            return Ok(jar);
        };
        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            jar.add_cookie_str(pair, &self.base_url);
        }
        debug!("Restored session from {}", self.path.display());
        Ok(jar)
    }

    /// Cookie header stored for this base URL
    pub fn read_header(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file '{}'", self.path.display()))?;
        let stored: StoredSession = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file '{}'", self.path.display()))?;
        if stored.base_url != self.base_url.as_str() {
            debug!(
                "Ignoring session saved for {} (current base URL {})",
                stored.base_url, self.base_url
            );
            return Ok(None);
        }
        Ok(Some(stored.cookies))
    }

    /// Write the jar's cookies for the base URL. An empty jar removes the file.
    pub fn save(&self, jar: &Jar) -> Result<()> {
        let header = jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string));

        let Some(cookies) = header.filter(|h| !h.is_empty()) else {
            return self.clear();
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        let stored = StoredSession {
            base_url: self.base_url.to_string(),
            cookies,
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)
            .with_context(|| format!("Failed to write session file '{}'", self.path.display()))?;
        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    /// Forget the saved session
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove '{}'", self.path.display()))?;
            info!("Cleared session file {}", self.path.display());
        }
        Ok(())
    }
}

/// Value of cookie `name` in a `Cookie` header (`a=1; b=2`).
///
/// Returns `None` when the cookie is missing or appears more than once.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    let mut found = None;
    for pair in header.split(';').map(str::trim) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key == name {
            if found.is_some() {
                return None;
            }
            found = Some(value);
        }
    }
    found
}
