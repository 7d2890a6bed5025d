//! # Hooksig Canonical
//!
//! Deterministic payload canonicalization and HMAC-SHA256 signing for webhooks.
//!
//! This crate provides:
//! - Payload flattening into dotted key paths
//! - Value cleaning (null removal, whitespace stripping)
//! - Canonical `key=value` encoding with byte-sorted keys
//! - HMAC-SHA256 signing and constant-time verification
//!
//! ## Canonicalization Rules
//!
//! 1. Nested objects and arrays flatten to dotted paths (`a.b`, `items.0.sku`)
//! 2. Keys sorted lexicographically by UTF-8 bytes
//! 3. Nulls, empty strings, and whitespace-only strings are dropped
//! 4. Every whitespace character inside kept strings is removed
//! 5. Booleans become the literals `true` and `false`
//! 6. Numbers keep their value, including zero
//!
//! ## Example
//!
//! ```rust
//! use hooksig_canonical::{compute_signature, signature_text, verify_signature, SigningSecret};
//!
//! let payload = serde_json::json!({
//!     "a": { "b": 1 },
//!     "d": [ { "x": "hi" }, { "x": "bye" } ]
//! });
//!
//! // Canonical signature text
//! let text = signature_text(&payload).unwrap();
//! assert_eq!(text, "a.b=1&d.0.x=hi&d.1.x=bye");
//!
//! // Sign and verify
//! let secret = SigningSecret::from_string("test_secret");
//! let signature = compute_signature(&payload, &secret).unwrap();
//! assert!(verify_signature(&payload, &secret, &signature));
//! ```
//!
//! ## Why Flatten?
//!
//! Receivers implement this scheme in many languages, and nested JSON
//! serializes inconsistently across them (key order, whitespace, escaping).
//! Flattening to sorted scalar pairs leaves nothing platform-dependent in
//! the signed text.

mod clean;
mod encode;
mod error;
mod flatten;
mod payload;
mod signature;

pub use clean::*;
pub use encode::*;
pub use error::*;
pub use flatten::*;
pub use payload::*;
pub use signature::*;
