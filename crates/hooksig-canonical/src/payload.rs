//! Signature derivation for webhook payloads

use crate::clean::clean_payload;
use crate::encode::encode_payload;
use crate::error::CanonicalError;
use crate::flatten::flatten_payload;
use crate::signature::{compute_hmac_hex, verify_hmac, SigningSecret};
use hooksig_core::WebhookEnvelope;
use serde::Serialize;
use serde_json::Value;

/// Derive the signature text for a payload
///
/// This is the authoritative implementation of the signing formula:
///
/// ```text
/// signature_text = join("&", sort(flatten_then_clean(payload) as "key=value"))
/// signature      = hex(hmac_sha256(secret, signature_text))
/// ```
///
/// The payload is serialized to JSON, flattened to dotted paths, cleaned
/// (nulls and empty strings dropped, whitespace stripped), and encoded as
/// byte-order-sorted `key=value` pairs joined with `&`.
///
/// # Errors
///
/// Returns `CanonicalError` if serialization fails or nesting exceeds the
/// depth limit.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::signature_text;
/// use serde_json::json;
///
/// let payload = json!({
///     "a": { "b": 1 },
///     "d": [ { "x": "hi" }, { "x": "bye" } ]
/// });
///
/// let text = signature_text(&payload).unwrap();
/// assert_eq!(text, "a.b=1&d.0.x=hi&d.1.x=bye");
/// ```
pub fn signature_text<T: Serialize>(payload: &T) -> Result<String, CanonicalError> {
    let value = serde_json::to_value(payload)?;
    signature_text_value(&value)
}

/// Derive the signature text for an already-parsed JSON value
///
/// Same as [`signature_text`] without the serialization step. Useful when
/// the payload arrives as raw JSON and has already been parsed.
pub fn signature_text_value(payload: &Value) -> Result<String, CanonicalError> {
    let flattened = flatten_payload(payload)?;
    let cleaned = clean_payload(flattened);
    Ok(encode_payload(&cleaned))
}

/// Compute the signature for a payload
///
/// Derives the signature text and returns its HMAC-SHA256 under `secret`
/// as a 64-character lowercase hex string.
///
/// # Errors
///
/// Returns `CanonicalError` if the signature text cannot be derived.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{compute_signature, SigningSecret};
/// use serde_json::json;
///
/// let payload = json!({ "a": { "b": 1 }, "d": [ { "x": "hi" }, { "x": "bye" } ] });
/// let secret = SigningSecret::from_string("test_secret");
///
/// let signature = compute_signature(&payload, &secret).unwrap();
/// assert_eq!(
///     signature,
///     "237f3c160d64add08b9ed787a90b158d64684aa42a480a581cc407c0651d1ab4"
/// );
/// ```
pub fn compute_signature<T: Serialize>(
    payload: &T,
    secret: &SigningSecret,
) -> Result<String, CanonicalError> {
    let text = signature_text(payload)?;
    Ok(compute_hmac_hex(&text, secret))
}

/// Verify a received signature against a payload
///
/// Returns `true` only when the payload canonicalizes and the recomputed
/// signature matches `received_signature` exactly. A payload that cannot
/// be canonicalized fails verification rather than erroring, so a hostile
/// sender cannot distinguish a malformed payload from a bad signature.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{compute_signature, verify_signature, SigningSecret};
/// use serde_json::json;
///
/// let payload = json!({ "id": "evt_1", "amount": 250 });
/// let secret = SigningSecret::from_string("shared");
///
/// let signature = compute_signature(&payload, &secret).unwrap();
/// assert!(verify_signature(&payload, &secret, &signature));
/// assert!(!verify_signature(&json!({ "id": "evt_2" }), &secret, &signature));
/// ```
pub fn verify_signature<T: Serialize>(
    payload: &T,
    secret: &SigningSecret,
    received_signature: &str,
) -> bool {
    match signature_text(payload) {
        Ok(text) => verify_hmac(&text, secret, received_signature),
        Err(_) => false,
    }
}

/// Compute the signature for a complete webhook envelope
///
/// Convenience function for the sending side. The envelope serializes back
/// to its wire form, so the signature matches what a receiver derives from
/// the raw request body.
pub fn compute_envelope_signature(
    envelope: &WebhookEnvelope,
    secret: &SigningSecret,
) -> Result<String, CanonicalError> {
    compute_signature(envelope, secret)
}

/// Verify a received signature against a complete webhook envelope
pub fn verify_envelope_signature(
    envelope: &WebhookEnvelope,
    secret: &SigningSecret,
    received_signature: &str,
) -> bool {
    verify_signature(envelope, secret, received_signature)
}
