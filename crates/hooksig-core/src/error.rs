//! Error types for Hooksig Core

use thiserror::Error;

use crate::validation::ValidationError;
use crate::version::VersionError;

/// Errors that can occur while handling webhook envelopes
#[derive(Debug, Error)]
pub enum HooksigError {
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
