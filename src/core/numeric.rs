//! Lenient numeric coercion for loosely-typed input records.
//!
//! Indicator rows arrive from forms and legacy JSON blobs where numbers may be
//! stored as strings, left empty, or missing entirely. Every numeric read in
//! the engine goes through [`to_number`] so malformed data degrades to the
//! caller's default instead of poisoning the aggregates with `NaN`.

use serde_json::Value;

/// Coerce an optional JSON value into a finite number.
///
/// Missing values, `null`, empty or non-numeric strings, arrays, objects and
/// non-finite results all yield `default`.
///
/// # Examples
///
/// ```
/// use roimap::core::numeric::to_number;
/// use serde_json::json;
///
/// assert_eq!(to_number(Some(&json!("42.5")), 0.0), 42.5);
/// assert_eq!(to_number(Some(&json!("")), 7.0), 7.0);
/// assert_eq!(to_number(Some(&json!("abc")), 0.0), 0.0);
/// assert_eq!(to_number(None, 3.0), 3.0);
/// ```
pub fn to_number(value: Option<&Value>, default: f64) -> f64 {
    value.and_then(parse_number).unwrap_or(default)
}

/// Parse a JSON value as a finite number, or `None` when it has no numeric reading.
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn parse_numeric_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Coerce and clamp to the non-negative domain. Used for rates, durations and costs.
pub fn non_negative(value: Option<&Value>) -> f64 {
    to_number(value, 0.0).max(0.0)
}

/// Sum starting from positive zero, so empty inputs report `0` rather than `-0`.
pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, value| acc + value)
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        sum(values.iter().copied()) / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(to_number(Some(&json!(12)), 0.0), 12.0);
        assert_eq!(to_number(Some(&json!(-3.5)), 0.0), -3.5);
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert_eq!(to_number(Some(&json!(" 60 ")), 0.0), 60.0);
        assert_eq!(to_number(Some(&json!("1e3")), 0.0), 1000.0);
    }

    #[test]
    fn test_absent_and_empty_values_use_default() {
        assert_eq!(to_number(None, 5.0), 5.0);
        assert_eq!(to_number(Some(&Value::Null), 5.0), 5.0);
        assert_eq!(to_number(Some(&json!("")), 5.0), 5.0);
        assert_eq!(to_number(Some(&json!("   ")), 5.0), 5.0);
    }

    #[test]
    fn test_garbage_uses_default() {
        assert_eq!(to_number(Some(&json!("R$ 50")), 0.0), 0.0);
        assert_eq!(to_number(Some(&json!("12abc")), 1.0), 1.0);
        assert_eq!(to_number(Some(&json!([1, 2])), 0.0), 0.0);
        assert_eq!(to_number(Some(&json!({"v": 1})), 0.0), 0.0);
    }

    #[test]
    fn test_non_finite_strings_use_default() {
        assert_eq!(to_number(Some(&json!("NaN")), 0.0), 0.0);
        assert_eq!(to_number(Some(&json!("inf")), 0.0), 0.0);
    }

    #[test]
    fn test_booleans_coerce_to_unit() {
        assert_eq!(to_number(Some(&json!(true)), 0.0), 1.0);
        assert_eq!(to_number(Some(&json!(false)), 9.0), 0.0);
    }

    #[test]
    fn test_non_negative_clamps() {
        assert_eq!(non_negative(Some(&json!(-10))), 0.0);
        assert_eq!(non_negative(Some(&json!("15"))), 15.0);
    }

    #[test]
    fn test_sum_of_empty_is_positive_zero() {
        let total = sum(std::iter::empty());
        assert!(total == 0.0 && total.is_sign_positive());
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
    }
}
