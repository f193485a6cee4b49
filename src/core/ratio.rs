//! Serde support for ratios that may legitimately be infinite.
//!
//! ROI and payback are reported as `f64::INFINITY` when there is nothing to
//! divide by. JSON has no infinity literal and `serde_json` would silently
//! emit `null`, so these fields are written as the strings `"Infinity"` /
//! `"-Infinity"` and read back from either form.
//!
//! Use with `#[serde(with = "crate::core::ratio")]`.

use serde::{Deserialize, Deserializer, Serializer};

const POS_INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_infinite() {
        serializer.serialize_str(if value.is_sign_positive() {
            POS_INFINITY
        } else {
            NEG_INFINITY
        })
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatioRepr {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RatioRepr::deserialize(deserializer)? {
        RatioRepr::Number(n) => Ok(n),
        RatioRepr::Text(text) => match text.as_str() {
            POS_INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => Err(serde::de::Error::custom(format!(
                "expected a number or \"Infinity\", found {other:?}"
            ))),
        },
    }
}

/// Format a ratio for human-readable output.
pub fn display(value: f64, decimals: usize) -> String {
    if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}
