//! Productivity: value of time saved by the same people on the same workload.
//!
//! Each post-change person is matched to the baseline person with the same
//! identity. Both durations are priced at the *baseline* occurrence rate, so
//! the delta isolates the change in time per occurrence. Unmatched post-change
//! persons contribute nothing.

use super::{annualize_monthly, CategoryCalculator, CategoryFields};
use crate::core::numeric::non_negative;
use crate::core::types::IndicatorCategory;
use crate::input::adapter::{legacy_frequency, HOURLY_RATE, MINUTES};
use crate::input::fields::{array, identity, lookup, non_negative_number, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PERSONS: &[&str] = &["persons", "people"];
const PERSON_ID: &[&str] = &["id", "personId", "person_id"];
const OCCURRENCES_PER_MONTH: &[&str] = &["occurrencesPerMonth", "occurrences_per_month"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityFields {
    /// Person-hours per month before, over matched persons.
    pub hours_before: f64,
    pub hours_after: f64,
    pub delta_monthly: f64,
    pub delta_annual: f64,
    pub matched_persons: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductivityCalculator;

impl CategoryCalculator for ProductivityCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Productivity
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let before_roster = array(baseline, PERSONS);
        let mut fields = ProductivityFields::default();

        for after in array(post_change, PERSONS) {
            let Some(key) = person_key(after) else {
                continue;
            };
            let Some(before) = before_roster
                .iter()
                .find(|candidate| person_key(candidate).as_deref() == Some(key.as_str()))
            else {
                tracing::debug!(person = %key, "no baseline match for post-change person");
                continue;
            };

            let occurrences = monthly_occurrences(before);
            let hh_before = non_negative_number(before, MINUTES) / 60.0 * occurrences;
            let hh_after = non_negative_number(after, MINUTES) / 60.0 * occurrences;
            let rate = match non_negative_number(after, HOURLY_RATE) {
                r if r > 0.0 => r,
                _ => non_negative_number(before, HOURLY_RATE),
            };

            fields.hours_before += hh_before;
            fields.hours_after += hh_after;
            fields.delta_monthly += (hh_before - hh_after) * rate;
            fields.matched_persons += 1;
        }

        fields.delta_annual = annualize_monthly(fields.delta_monthly);
        CategoryFields::Productivity(fields)
    }
}

/// Stable identity: explicit id, falling back to the person's name.
fn person_key(person: &Value) -> Option<String> {
    identity(person, PERSON_ID).or_else(|| {
        text(person, &["name"])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    })
}

fn monthly_occurrences(person: &Value) -> f64 {
    match lookup(person, OCCURRENCES_PER_MONTH) {
        Some(value) => non_negative(Some(value)),
        None => legacy_frequency(person).monthly_occurrences(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unwrap(fields: CategoryFields) -> ProductivityFields {
        match fields {
            CategoryFields::Productivity(f) => f,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_matched_persons_use_baseline_rate() {
        let baseline = json!({"persons": [
            {"id": 1, "timeSpentMinutes": 60, "hourlyRate": 50, "occurrencesPerMonth": 20},
            {"id": 2, "timeSpentMinutes": 30, "hourlyRate": 40, "occurrencesPerMonth": 10}
        ]});
        let post = json!({"persons": [
            {"id": 1, "timeSpentMinutes": 15, "hourlyRate": 50, "occurrencesPerMonth": 999},
            {"id": 3, "timeSpentMinutes": 5, "hourlyRate": 90}
        ]});

        let fields = unwrap(ProductivityCalculator.calculate(&baseline, &post));

        assert_eq!(fields.matched_persons, 1);
        assert_eq!(fields.hours_before, 20.0);
        assert_eq!(fields.hours_after, 5.0);
        assert_eq!(fields.delta_monthly, 750.0);
        assert_eq!(fields.delta_annual, 9000.0);
    }

    #[test]
    fn test_matches_by_name_and_legacy_frequency() {
        let baseline = json!({"persons": [
            {"name": "Bia", "timeSpentMinutes": 60, "hourlyRate": 30,
             "frequencyQuantity": 1, "frequencyPeriod": "Diário"}
        ]});
        let post = json!({"persons": [
            {"name": "Bia", "timeSpentMinutes": 30}
        ]});

        let fields = unwrap(ProductivityCalculator.calculate(&baseline, &post));

        // 30 occurrences/month, 0.5h saved each, baseline rate 30
        assert_eq!(fields.delta_monthly, 450.0);
    }

    #[test]
    fn test_no_roster_is_zero() {
        let fields = unwrap(ProductivityCalculator.calculate(&json!({}), &json!({})));
        assert_eq!(fields, ProductivityFields::default());
    }
}
