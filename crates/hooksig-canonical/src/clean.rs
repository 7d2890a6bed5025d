//! Empty-entry pruning and scalar normalization

use crate::flatten::FlatValue;
use serde_json::Number;
use std::collections::BTreeMap;

/// A cleaned scalar, ready for canonical encoding.
///
/// Booleans are already rendered to their literal text form; numbers keep
/// their numeric representation until the encoder renders them.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanValue {
    Text(String),
    Number(Number),
}

/// Drop empty entries and normalize the survivors.
///
/// # Rules
///
/// - Null entries are dropped
/// - Strings lose every whitespace character, interior included; entries
///   with nothing left are dropped
/// - Booleans become the literal text `true` / `false` and are never dropped
/// - Numbers pass through untouched and are never dropped, zero included
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{clean_payload, flatten_payload, CleanValue};
///
/// let payload = serde_json::json!({"note": " hi there ", "gone": null, "ok": true});
/// let cleaned = clean_payload(flatten_payload(&payload).unwrap());
///
/// assert_eq!(
///     cleaned.get("note"),
///     Some(&CleanValue::Text("hithere".to_string()))
/// );
/// assert_eq!(cleaned.get("ok"), Some(&CleanValue::Text("true".to_string())));
/// assert!(!cleaned.contains_key("gone"));
/// ```
pub fn clean_payload(flat: BTreeMap<String, FlatValue>) -> BTreeMap<String, CleanValue> {
    let mut cleaned = BTreeMap::new();

    for (path, value) in flat {
        match value {
            FlatValue::Null => {}
            FlatValue::Bool(b) => {
                let text = if b { "true" } else { "false" };
                cleaned.insert(path, CleanValue::Text(text.to_string()));
            }
            FlatValue::Number(n) => {
                cleaned.insert(path, CleanValue::Number(n));
            }
            FlatValue::Text(s) => {
                let stripped = strip_whitespace(&s);
                if !stripped.is_empty() {
                    cleaned.insert(path, CleanValue::Text(stripped));
                }
            }
        }
    }

    cleaned
}

/// Remove every whitespace character, edges and interior alike.
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
