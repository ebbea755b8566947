//! Canonical request hashing.
//!
//! Two requests that describe the same synthesis hash identically regardless
//! of field order or whitespace in their JSON source:
//!
//! ```text
//! request_hash = hex(BLAKE3(JCS(request_json)))
//! ```
//!
//! JCS is the JSON Canonicalization Scheme (RFC 8785): keys sorted, no
//! insignificant whitespace, minimal string escaping.

use std::fmt::Write as _;

use crate::error::SpecError;
use crate::request::Request;

/// Computes the canonical BLAKE3 hash of a request.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use wavegen_spec::{Family, Request};
/// use wavegen_spec::hash::canonical_request_hash;
///
/// let request = Request::builder(Family::SineTime, 44100).build();
/// let hash = canonical_request_hash(&request).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_request_hash(request: &Request) -> Result<String, SpecError> {
    let value = request.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SpecError> {
    let canonical = canonicalize_json(value)?;
    Ok(blake3_hash(canonical.as_bytes()))
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
pub fn canonicalize_json(value: &serde_json::Value) -> Result<String, SpecError> {
    let mut out = String::new();
    write_canonical(value, &mut out)
        .map_err(|e| SpecError::Canonicalization(e.to_string()))?;
    Ok(out)
}

fn write_canonical(value: &serde_json::Value, out: &mut String) -> std::fmt::Result {
    match value {
        serde_json::Value::Null => out.write_str("null"),
        serde_json::Value::Bool(b) => write!(out, "{}", b),
        serde_json::Value::Number(n) => out.write_str(&format_jcs_number(n)),
        serde_json::Value::String(s) => write_jcs_string(s, out),
        serde_json::Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_canonical(item, out)?;
            }
            out.write_char(']')
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.write_char('{')?;
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_jcs_string(key, out)?;
                out.write_char(':')?;
                write_canonical(item, out)?;
            }
            out.write_char('}')
        }
    }
}

/// Formats a number according to JCS rules.
fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                "0".to_string()
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", f as i64)
            } else {
                // Rust's shortest round-trip formatting matches JCS for the
                // non-exponent range.
                format!("{}", f)
            }
        }
        _ => "null".to_string(),
    }
}

/// Writes a string according to JCS rules.
fn write_jcs_string(s: &str, out: &mut String) -> std::fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\u{08}' => out.write_str("\\b")?,
            '\u{0c}' => out.write_str("\\f")?,
            c if c < '\x20' => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

/// Computes a BLAKE3 hash of arbitrary data as lowercase hex.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Family, KarplusStrongParams};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sine_request() -> Request {
        Request::builder(Family::SineTime, 44100)
            .frequency(440.0)
            .amplitude(0.5)
            .duration(1.0)
            .build()
    }

    #[test]
    fn test_canonical_request_hash() {
        let hash = canonical_request_hash(&sine_request()).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_stability() {
        let a = canonical_request_hash(&sine_request()).unwrap();
        let b = canonical_request_hash(&sine_request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let a = r#"{"family":{"type":"sine-time"},"frequency":440.0,"amplitude":0.5,"duration_seconds":1.0,"sample_rate":44100}"#;
        let b = r#"{
            "sample_rate": 44100,
            "duration_seconds": 1.0,
            "amplitude": 0.5,
            "frequency": 440.0,
            "family": {"type": "sine-time"}
        }"#;
        let ha = canonical_request_hash(&Request::from_json(a).unwrap()).unwrap();
        let hb = canonical_request_hash(&Request::from_json(b).unwrap()).unwrap();
        assert_eq!(ha, hb);
    }

    #[test]
    fn test_seed_change_changes_hash() {
        let a = canonical_request_hash(&sine_request()).unwrap();
        let b = canonical_request_hash(&sine_request().with_seed(1)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_family_params_change_hash() {
        let base = Request::builder(Family::KarplusStrong(KarplusStrongParams::default()), 8000)
            .build();
        let mut params = KarplusStrongParams::default();
        params.feedback_probability = 0.5;
        let changed = Request::builder(Family::KarplusStrong(params), 8000).build();
        assert_ne!(
            canonical_request_hash(&base).unwrap(),
            canonical_request_hash(&changed).unwrap()
        );
    }

    #[test]
    fn test_canonicalize_json_object_ordering() {
        let value = json!({"z": 1, "a": 2, "m": 3});
        assert_eq!(canonicalize_json(&value).unwrap(), r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn test_canonicalize_json_nested() {
        let value = json!({"b": [1, {"d": true, "c": null}], "a": "x"});
        assert_eq!(
            canonicalize_json(&value).unwrap(),
            r#"{"a":"x","b":[1,{"c":null,"d":true}]}"#
        );
    }

    #[test]
    fn test_canonicalize_json_strings() {
        let value = json!("line\nbreak \"quoted\"");
        assert_eq!(
            canonicalize_json(&value).unwrap(),
            r#""line\nbreak \"quoted\"""#
        );
    }

    #[test]
    fn test_format_jcs_number() {
        assert_eq!(format_jcs_number(&serde_json::Number::from(42)), "42");
        let float = serde_json::Number::from_f64(440.0).unwrap();
        assert_eq!(format_jcs_number(&float), "440");
        let frac = serde_json::Number::from_f64(0.25).unwrap();
        assert_eq!(format_jcs_number(&frac), "0.25");
    }

    #[test]
    fn test_blake3_hash() {
        let hash = blake3_hash(b"wavegen");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, blake3_hash(b"wavegen"));
        assert_ne!(hash, blake3_hash(b"wavegen2"));
    }
}
