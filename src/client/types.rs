//! HTTP API Request/Response Types
//!
//! JSON bodies exchanged with the service.

use serde::{Deserialize, Serialize};

use crate::types::{QueryChunk, DEFAULT_TOP_K};

/// Body of `POST /query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The query text
    pub query_text: String,
    /// Number of chunks to return
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl QueryRequest {
    pub fn new(query_text: impl Into<String>, top_k: usize) -> Self {
        Self {
            query_text: query_text.into(),
            top_k,
        }
    }
}

/// Response of `POST /query`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Retrieved chunks, best first. Absent means no results.
    #[serde(default)]
    pub query_results: Option<Vec<QueryChunk>>,
}

impl QueryResponse {
    pub fn into_chunks(self) -> Vec<QueryChunk> {
        self.query_results.unwrap_or_default()
    }
}

/// Response of `POST /filter_message/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterMessageResponse {
    pub filtered_message: String,
}

/// Response of `POST /index_document`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexDocumentResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_body() {
        let body = serde_json::to_value(QueryRequest::new("what is rust", 3)).unwrap();
        assert_eq!(body, serde_json::json!({"query_text": "what is rust", "top_k": 3}));
    }

    #[test]
    fn test_query_response_missing_results() {
        let resp: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_chunks().is_empty());

        let resp: QueryResponse = serde_json::from_str(r#"{"query_results": null}"#).unwrap();
        assert!(resp.into_chunks().is_empty());
    }

    #[test]
    fn test_query_response_keeps_order_and_ignores_extra_fields() {
        let resp: QueryResponse = serde_json::from_str(
            r#"{"query_results": [{"chunk": "b", "score": 0.9}, {"chunk": "a"}]}"#,
        )
        .unwrap();
        let chunks = resp.into_chunks();
        assert_eq!(chunks, vec![QueryChunk::new("b"), QueryChunk::new("a")]);
    }

    #[test]
    fn test_index_document_response_message_optional() {
        let resp: IndexDocumentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.message.is_none());
        let resp: IndexDocumentResponse =
            serde_json::from_str(r#"{"message": "Indexed 12 chunks"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Indexed 12 chunks"));
    }
}
