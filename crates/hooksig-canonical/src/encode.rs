//! Canonical signature-text encoding
//!
//! The last pipeline stage: renders a cleaned mapping as `key=value` tokens
//! joined by `&`, with keys in ascending byte order.

use crate::clean::CleanValue;
use serde_json::Number;
use std::collections::BTreeMap;

/// Serialize a cleaned mapping into the canonical signature text
///
/// # Rules
///
/// - Keys sort ascending by UTF-8 byte order (not locale-aware, not
///   numeric-aware, so `a10` sorts before `a2`)
/// - Each entry renders as `key=value`; tokens join with `&` and there is
///   no trailing delimiter
/// - Text renders as-is (already normalized by the cleaner); numbers render
///   through [`canonical_number`]
/// - An empty mapping encodes to the empty string
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::{clean_payload, encode_payload, flatten_payload};
///
/// let payload = serde_json::json!({"b": true, "a": {"c": 2}});
/// let cleaned = clean_payload(flatten_payload(&payload).unwrap());
///
/// assert_eq!(encode_payload(&cleaned), "a.c=2&b=true");
/// ```
pub fn encode_payload(cleaned: &BTreeMap<String, CleanValue>) -> String {
    // Sort explicitly by bytes; the mapping's own iteration order is never
    // relied upon.
    let mut keys: Vec<&String> = cleaned.keys().collect();
    keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));

    let mut output = String::new();
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            output.push('&');
        }

        output.push_str(key);
        output.push('=');

        if let Some(value) = cleaned.get(*key) {
            match value {
                CleanValue::Text(text) => output.push_str(text),
                CleanValue::Number(number) => output.push_str(&canonical_number(number)),
            }
        }
    }

    output
}

/// Render a JSON number in its canonical text form
///
/// Integers print as plain decimal. Everything else goes through `f64`'s
/// `Display`, which produces the shortest round-trip decimal form: integral
/// floats drop the fractional part (`1.0` → `1`, `1e2` → `100`) and exponent
/// notation never appears. `serde_json`'s own rendering (`1.0`, `1e21`)
/// must not be used here.
///
/// # Example
///
/// ```rust
/// use hooksig_canonical::canonical_number;
///
/// let number: serde_json::Number = "51.5".parse().unwrap();
/// assert_eq!(canonical_number(&number), "51.5");
/// ```
pub fn canonical_number(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else if let Some(f) = number.as_f64() {
        f.to_string()
    } else {
        // Unreachable without serde_json's arbitrary_precision feature.
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::clean_payload;
    use crate::flatten::flatten_payload;
    use serde_json::json;

    fn encode(payload: serde_json::Value) -> String {
        encode_payload(&clean_payload(flatten_payload(&payload).unwrap()))
    }

    #[test]
    fn test_tokens_joined_with_ampersand() {
        assert_eq!(encode(json!({"a": 1, "b": 2})), "a=1&b=2");
    }

    #[test]
    fn test_empty_mapping_encodes_empty_string() {
        assert_eq!(encode(json!({})), "");
    }

    #[test]
    fn test_single_entry_has_no_delimiter() {
        assert_eq!(encode(json!({"only": "one"})), "only=one");
    }

    #[test]
    fn test_byte_order_not_numeric_order() {
        // "a10" < "a2" byte-wise even though 2 < 10 numerically.
        assert_eq!(encode(json!({"a2": 2, "a10": 10})), "a10=10&a2=2");
    }

    #[test]
    fn test_nested_paths_sorted_with_scalars() {
        let payload = json!({"z": 1, "a": {"b": 2}});
        assert_eq!(encode(payload), "a.b=2&z=1");
    }

    #[test]
    fn test_integer_rendering() {
        let number = Number::from(42);
        assert_eq!(canonical_number(&number), "42");
    }

    #[test]
    fn test_negative_integer_rendering() {
        let number = Number::from(-42);
        assert_eq!(canonical_number(&number), "-42");
    }

    #[test]
    fn test_zero_rendering() {
        let number = Number::from(0);
        assert_eq!(canonical_number(&number), "0");
    }

    #[test]
    fn test_fractional_rendering() {
        let number: Number = "51.5".parse().unwrap();
        assert_eq!(canonical_number(&number), "51.5");
    }

    #[test]
    fn test_integral_float_drops_fraction() {
        let number = Number::from_f64(1.0).unwrap();
        assert_eq!(canonical_number(&number), "1");
    }

    #[test]
    fn test_exponent_literal_rendered_plain() {
        // "1e2" parses as the float 100.0; the canonical form is plain
        // decimal, never exponent notation.
        let number: Number = "1e2".parse().unwrap();
        assert_eq!(canonical_number(&number), "100");
    }

    #[test]
    fn test_negative_fraction_rendering() {
        let number = Number::from_f64(-0.25).unwrap();
        assert_eq!(canonical_number(&number), "-0.25");
    }

    #[test]
    fn test_large_i64_exact() {
        let number = Number::from(i64::MAX);
        assert_eq!(canonical_number(&number), "9223372036854775807");
    }

    #[test]
    fn test_u64_above_i64_range_exact() {
        let number = Number::from(u64::MAX);
        assert_eq!(canonical_number(&number), "18446744073709551615");
    }

    #[test]
    fn test_number_rendering_in_encoded_output() {
        let payload = json!({"count": 0, "share": 48.5});
        assert_eq!(encode(payload), "count=0&share=48.5");
    }
}
