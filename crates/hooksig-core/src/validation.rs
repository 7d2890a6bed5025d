//! Envelope validation
//!
//! Shape checks for inbound webhook envelopes, applied after parsing and
//! before the payload is handed to signature verification or dispatch.

use crate::types::{WebhookEnvelope, WebhookEvent, WebhookEventAttempt};
use crate::version::EventVersion;
use thiserror::Error;

/// Errors that can occur during validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty event id")]
    EmptyEventId,

    #[error("Empty attempt id")]
    EmptyAttemptId,

    #[error("Empty event type")]
    EmptyEventType,

    #[error("Invalid event type '{0}': expected dotted lowercase segments (e.g., 'company.created')")]
    InvalidEventType(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Version mismatch: got '{got}', expected compatible with '{expected}'")]
    VersionMismatch { got: String, expected: String },

    #[error("Invalid timestamp '{value}' for {field}: must be epoch milliseconds")]
    InvalidTimestamp { field: String, value: String },
}

/// Validate a webhook envelope
///
/// # Errors
///
/// Returns `ValidationError` if the envelope is invalid.
///
/// # Example
///
/// ```ignore
/// use hooksig_core::{validate_envelope, WebhookEnvelope};
///
/// let envelope: WebhookEnvelope = serde_json::from_str(json)?;
/// validate_envelope(&envelope)?;
/// ```
pub fn validate_envelope(envelope: &WebhookEnvelope) -> Result<(), ValidationError> {
    validate_event(&envelope.webhook_event)?;
    validate_attempt(&envelope.webhook_event_attempt)?;
    Ok(())
}

/// Validate the event descriptor
pub fn validate_event(event: &WebhookEvent) -> Result<(), ValidationError> {
    if event.id.is_empty() {
        return Err(ValidationError::EmptyEventId);
    }

    validate_event_type(&event.event_type)?;
    validate_version(&event.version)?;
    validate_timestamp("fired_at", &event.fired_at)?;

    Ok(())
}

/// Validate the delivery attempt
pub fn validate_attempt(attempt: &WebhookEventAttempt) -> Result<(), ValidationError> {
    if attempt.id.is_empty() {
        return Err(ValidationError::EmptyAttemptId);
    }

    validate_timestamp("sent_at", &attempt.sent_at)?;

    Ok(())
}

/// Validate the dotted event type, e.g. "company.created"
fn validate_event_type(event_type: &str) -> Result<(), ValidationError> {
    if event_type.is_empty() {
        return Err(ValidationError::EmptyEventType);
    }

    let mut segments = 0;
    for segment in event_type.split('.') {
        let well_formed = !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
        if !well_formed {
            return Err(ValidationError::InvalidEventType(event_type.to_string()));
        }
        segments += 1;
    }

    // A type names a resource and an action, so one segment is not enough.
    if segments < 2 {
        return Err(ValidationError::InvalidEventType(event_type.to_string()));
    }

    Ok(())
}

/// Validate version string
fn validate_version(version: &str) -> Result<(), ValidationError> {
    let parsed = EventVersion::parse(version)
        .map_err(|e| ValidationError::InvalidVersionFormat(e.to_string()))?;

    let current = EventVersion::current();
    if !parsed.is_compatible_with(&current) {
        return Err(ValidationError::VersionMismatch {
            got: version.to_string(),
            expected: current.to_string(),
        });
    }

    Ok(())
}

/// Validate an epoch-milliseconds string field
fn validate_timestamp(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
