//! Session persistence and query defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::DEFAULT_TOP_K;

/// Where the session cookie jar is kept between invocations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file path
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
    /// Save cookies after each command
    #[serde(default = "default_true")]
    pub persist: bool,
}

fn default_session_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "dot3")
        .map(|d| d.data_dir().join("session.json"))
        .unwrap_or_else(|| PathBuf::from(".dot3/session.json"))
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
            persist: true,
        }
    }
}

/// Query defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Number of chunks requested per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}
