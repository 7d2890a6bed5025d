//! Payload flattening
//!
//! Converts a nested JSON value into a flat mapping from dotted path strings
//! to scalar values. Object keys extend the parent path with `.`; array
//! elements append their zero-based index as a segment, so
//! `{"owners": [{"name": "x"}]}` flattens to `owners.0.name` → `x`.

use crate::error::CanonicalError;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Maximum number of nested container levels accepted by the flattener.
///
/// Webhook payloads are attacker-influenced input, so the recursion is
/// bounded instead of riding an unbounded call stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A scalar produced by flattening.
///
/// Containers never survive flattening (they are walked into path-addressed
/// scalars), so this type has no object or array variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

/// Flatten a payload into path → scalar entries.
///
/// # Rules
///
/// - Object entries extend the parent path with `.key` (or start it)
/// - Array elements extend the parent path with `.index`, zero-based
/// - Nested containers recurse; scalars and nulls are stored as-is
/// - Empty objects and empty arrays contribute no entries
/// - A bare scalar at the root has no addressable path and yields an
///   empty mapping
///
/// The iteration order of source objects never influences the result.
///
/// # Errors
///
/// Returns [`CanonicalError::MaxDepthExceeded`] when containers nest deeper
/// than [`MAX_NESTING_DEPTH`] levels.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{flatten_payload, FlatValue};
///
/// let payload = serde_json::json!({"a": {"b": [true, null]}});
/// let flat = flatten_payload(&payload).unwrap();
///
/// assert_eq!(flat.get("a.b.0"), Some(&FlatValue::Bool(true)));
/// assert_eq!(flat.get("a.b.1"), Some(&FlatValue::Null));
/// ```
pub fn flatten_payload(payload: &Value) -> Result<BTreeMap<String, FlatValue>, CanonicalError> {
    let mut flat = BTreeMap::new();
    if matches!(payload, Value::Object(_) | Value::Array(_)) {
        flatten_into(&mut flat, payload, String::new(), 0)?;
    }
    Ok(flat)
}

fn flatten_into(
    flat: &mut BTreeMap<String, FlatValue>,
    value: &Value,
    path: String,
    depth: usize,
) -> Result<(), CanonicalError> {
    match value {
        Value::Object(entries) => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(CanonicalError::MaxDepthExceeded {
                    limit: MAX_NESTING_DEPTH,
                });
            }
            for (key, child) in entries {
                flatten_into(flat, child, join_path(&path, key), depth + 1)?;
            }
        }
        Value::Array(elements) => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(CanonicalError::MaxDepthExceeded {
                    limit: MAX_NESTING_DEPTH,
                });
            }
            for (index, child) in elements.iter().enumerate() {
                flatten_into(flat, child, join_path(&path, &index.to_string()), depth + 1)?;
            }
        }
        Value::Null => {
            flat.insert(path, FlatValue::Null);
        }
        Value::Bool(b) => {
            flat.insert(path, FlatValue::Bool(*b));
        }
        Value::Number(n) => {
            flat.insert(path, FlatValue::Number(n.clone()));
        }
        Value::String(s) => {
            flat.insert(path, FlatValue::Text(s.clone()));
        }
    }
    Ok(())
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}
