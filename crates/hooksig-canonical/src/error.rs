//! Error types for payload canonicalization

use thiserror::Error;

/// Errors that can occur while building the canonical signature text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("Payload nesting exceeds {limit} container levels")]
    MaxDepthExceeded { limit: usize },

    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}
