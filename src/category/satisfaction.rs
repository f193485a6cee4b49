use super::{percent_change, CategoryCalculator, CategoryFields};
use crate::core::types::IndicatorCategory;
use crate::input::fields::number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SCORE: &[&str] = &["score", "nps", "csat"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionFields {
    pub score_before: f64,
    pub score_after: f64,
    pub delta_points: f64,
    pub delta_percent: f64,
}

/// Satisfaction scores (NPS, CSAT) have no monetary reading; the delta stays in points.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatisfactionCalculator;

impl CategoryCalculator for SatisfactionCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Satisfaction
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let score_before = number(baseline, SCORE);
        let score_after = number(post_change, SCORE);
        CategoryFields::Satisfaction(SatisfactionFields {
            score_before,
            score_after,
            delta_points: score_after - score_before,
            delta_percent: percent_change(score_before, score_after),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_delta() {
        let fields = SatisfactionCalculator.calculate(&json!({"score": 40}), &json!({"nps": 50}));
        assert_eq!(
            fields,
            CategoryFields::Satisfaction(SatisfactionFields {
                score_before: 40.0,
                score_after: 50.0,
                delta_points: 10.0,
                delta_percent: 25.0,
            })
        );
    }

    #[test]
    fn test_zero_baseline_has_no_percent() {
        let fields = SatisfactionCalculator.calculate(&json!({}), &json!({"score": 7}));
        let CategoryFields::Satisfaction(fields) = fields else {
            panic!("wrong variant");
        };
        assert_eq!(fields.delta_percent, 0.0);
        assert_eq!(fields.delta_points, 7.0);
    }
}
