//! HMAC-SHA256 signing and constant-time verification

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretSlice};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Shared signing secret
///
/// Wraps the key bytes so they are zeroized on drop and redacted in debug
/// output. The secret never appears in canonical text, errors, or logs.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::SigningSecret;
///
/// let secret = SigningSecret::from_string("whsec_c2VjcmV0");
/// let debug = format!("{:?}", secret);
/// assert!(!debug.contains("whsec_c2VjcmV0"));
/// ```
#[derive(Debug)]
pub struct SigningSecret(SecretSlice<u8>);

impl SigningSecret {
    /// Wrap raw secret bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(SecretSlice::from(bytes))
    }

    /// Wrap the UTF-8 bytes of a secret string.
    pub fn from_string(secret: impl Into<String>) -> Self {
        Self::from_bytes(secret.into().into_bytes())
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl From<&str> for SigningSecret {
    fn from(secret: &str) -> Self {
        Self::from_string(secret)
    }
}

impl From<Vec<u8>> for SigningSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Compute the HMAC-SHA256 of a signature text
///
/// Returns a 64-character lowercase hex string. An empty secret is accepted
/// and keys of any length work; callers should still treat an empty secret
/// as an upstream configuration failure.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{compute_hmac_hex, SigningSecret};
///
/// let secret = SigningSecret::from_string("Jefe");
/// let signature = compute_hmac_hex("what do ya want for nothing?", &secret);
///
/// assert_eq!(
///     signature,
///     "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
/// );
/// ```
pub fn compute_hmac_hex(text: &str, secret: &SigningSecret) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(text.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a received signature against a signature text
///
/// Recomputes the HMAC and compares in constant time. A malformed or
/// wrong-length received signature simply fails the comparison.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{compute_hmac_hex, verify_hmac, SigningSecret};
///
/// let secret = SigningSecret::from_string("shared");
/// let signature = compute_hmac_hex("a=1&b=2", &secret);
///
/// assert!(verify_hmac("a=1&b=2", &secret, &signature));
/// assert!(!verify_hmac("a=1&b=3", &secret, &signature));
/// ```
pub fn verify_hmac(text: &str, secret: &SigningSecret, received_signature: &str) -> bool {
    let computed = compute_hmac_hex(text, secret);
    constant_time_compare(&computed, received_signature)
}

/// Constant-time string comparison to prevent timing attacks
///
/// Both operands are reduced to SHA-256 digests and the fixed-size digests
/// are folded with XOR, so execution time depends neither on where the
/// inputs first differ nor on the received operand's length.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_digest = Sha256::digest(a.as_bytes());
    let b_digest = Sha256::digest(b.as_bytes());

    let mut result = 0u8;
    for (x, y) in a_digest.iter().zip(b_digest.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Validate a signature string format
///
/// Returns `true` if the string is a valid 64-character hex string.
pub fn is_valid_signature(signature: &str) -> bool {
    signature.len() == 64 && signature.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize a signature to lowercase
///
/// Returns the signature in lowercase, or `None` if invalid. Useful for
/// header values before the case-sensitive comparison.
pub fn normalize_signature(signature: &str) -> Option<String> {
    if signature.len() != 64 || !signature.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(signature.to_lowercase())
}
