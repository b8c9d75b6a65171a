//! Core types shared by the client, the view and the CLI

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::parse_leading_int;

/// Server-tracked permission counter
pub type PermissionLevel = i64;

/// Identifier of an agent attached to the logged-in session
pub type AgentId = String;

/// Number of chunks requested per query unless configured otherwise
pub const DEFAULT_TOP_K: usize = 3;

// ============================================================================
// Filter Words
// ============================================================================

/// A token on the server's filter list.
///
/// Always trimmed and never empty; use [`FilterWord::parse`] to build one
/// from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterWord(String);

impl FilterWord {
    /// Trim raw input, returning `None` when nothing is left
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Query
// ============================================================================

/// One retrieved unit of document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryChunk {
    pub chunk: String,
}

impl QueryChunk {
    pub fn new(chunk: impl Into<String>) -> Self {
        Self {
            chunk: chunk.into(),
        }
    }
}

/// Parse the body of a permission change response.
///
/// Mirrors `parseInt(body) || 0`: leading whitespace is skipped, an optional
/// sign and the leading digits are read, and anything unparsable is 0.
pub fn parse_permission_level(body: &str) -> PermissionLevel {
    parse_leading_int(body).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_word_trims() {
        let word = FilterWord::parse("  spam \n").unwrap();
        assert_eq!(word.as_str(), "spam");
        assert_eq!(word.to_string(), "spam");
    }

    #[test]
    fn test_filter_word_rejects_blank() {
        assert!(FilterWord::parse("").is_none());
        assert!(FilterWord::parse("   \t").is_none());
    }

    #[test]
    fn test_parse_permission_level() {
        assert_eq!(parse_permission_level("3"), 3);
        assert_eq!(parse_permission_level("  -2\n"), -2);
        assert_eq!(parse_permission_level("7 levels"), 7);
        assert_eq!(parse_permission_level("\"4\""), 0);
        assert_eq!(parse_permission_level(""), 0);
        assert_eq!(parse_permission_level("none"), 0);
    }
}
