//! Client Module
//!
//! The HTTP contract of the filtering/query service. [`Api`] is the seam the
//! dashboard talks to; [`HttpApi`] is the reqwest implementation.

pub mod http;
pub mod session;
pub mod types;

pub use http::HttpApi;
pub use session::{cookie_value, SessionStore};

use async_trait::async_trait;
use reqwest::StatusCode;
use std::path::Path;
use thiserror::Error;

use crate::types::{AgentId, PermissionLevel, QueryChunk};
use self::types::QueryRequest;

/// Errors that can occur when talking to the service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Status code of a non-success response, if that is what this is
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Convert a non-success response into [`ClientError::Status`] carrying the
/// response body text.
pub async fn status_check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

/// Operations exposed by the remote service, one per endpoint
#[async_trait]
pub trait Api: Send + Sync {
    /// GET /filter
    async fn list_filter_words(&self) -> Result<Vec<String>, ClientError>;

    /// POST /filter/{word}
    async fn add_filter_word(&self, word: &str) -> Result<(), ClientError>;

    /// DELETE /filter/{word}
    async fn delete_filter_word(&self, word: &str) -> Result<(), ClientError>;

    /// POST /filter_message/?message=
    async fn filter_message(&self, message: &str) -> Result<String, ClientError>;

    /// POST /index_document, returning the server's message if it sent one
    async fn index_document(&self, path: &Path) -> Result<Option<String>, ClientError>;

    /// POST /query
    async fn query(&self, request: &QueryRequest) -> Result<Vec<QueryChunk>, ClientError>;

    /// POST /login/{username}
    async fn login(&self, username: &str) -> Result<(), ClientError>;

    /// POST /logout
    async fn logout(&self) -> Result<(), ClientError>;

    /// POST /list_agents
    async fn list_agents(&self) -> Result<Vec<AgentId>, ClientError>;

    /// POST /increase_permission
    async fn increase_permission(&self) -> Result<PermissionLevel, ClientError>;

    /// POST /decrease_permission
    async fn decrease_permission(&self) -> Result<PermissionLevel, ClientError>;
}
