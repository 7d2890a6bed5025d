//! # Hooksig Core
//!
//! Webhook envelope types and validation.
//!
//! This crate provides:
//! - Type definitions for the webhook envelope (event, delivery attempt,
//!   event details)
//! - Event version parsing and compatibility checking
//! - Envelope validation
//!
//! ## Example
//!
//! ```rust,ignore
//! use hooksig_core::{validate_envelope, WebhookEnvelope};
//!
//! // Parse an envelope
//! let envelope: WebhookEnvelope = serde_json::from_str(json)?;
//!
//! // Validate
//! validate_envelope(&envelope)?;
//! ```

pub mod error;
pub mod types;
pub mod validation;
pub mod version;

// Re-exports for convenience
pub use error::*;
pub use types::*;
pub use validation::*;
pub use version::*;
