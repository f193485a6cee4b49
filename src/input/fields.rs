//! Field access on raw JSON records.
//!
//! Records come either from the dashboard (camelCase keys) or straight from
//! database rows (snake_case keys). Each accessor takes the accepted key
//! spellings in priority order and returns the first non-null hit.

use crate::core::numeric::{non_negative, to_number};
use serde_json::Value;

/// First present, non-null value under any of `keys`.
pub fn lookup<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

pub fn has_any(record: &Value, keys: &[&str]) -> bool {
    lookup(record, keys).is_some()
}

pub fn number(record: &Value, keys: &[&str]) -> f64 {
    to_number(lookup(record, keys), 0.0)
}

pub fn non_negative_number(record: &Value, keys: &[&str]) -> f64 {
    non_negative(lookup(record, keys))
}

/// Like [`non_negative_number`] but `None` when the field is absent.
pub fn optional_number(record: &Value, keys: &[&str]) -> Option<f64> {
    lookup(record, keys).map(|value| non_negative(Some(value)))
}

pub fn text<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    lookup(record, keys).and_then(Value::as_str)
}

pub fn array<'a>(record: &'a Value, keys: &[&str]) -> &'a [Value] {
    lookup(record, keys)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Stringified identity; numeric ids compare equal to their decimal text.
pub fn identity(record: &Value, keys: &[&str]) -> Option<String> {
    lookup(record, keys).and_then(value_identity)
}

pub fn value_identity(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
