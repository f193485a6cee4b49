use super::{carried_over, CategoryCalculator, CategoryFields};
use crate::core::types::IndicatorCategory;
use crate::input::fields::number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PROBABILITY_PERCENT: &[&str] = &["probabilityPercent", "probability_percent", "probability"];
const IMPACT: &[&str] = &["impact", "impactCost", "impact_cost"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RiskReductionFields {
    pub expected_loss_before: f64,
    pub expected_loss_after: f64,
    pub delta_probability_points: f64,
    /// Expected loss avoided; positive when risk went down.
    pub delta: f64,
}

/// Expected-loss model: `probability% * impact` per scenario. A post-change
/// payload without an impact keeps the baseline impact.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskReductionCalculator;

impl CategoryCalculator for RiskReductionCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::RiskReduction
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let probability_before = number(baseline, PROBABILITY_PERCENT);
        let probability_after = number(post_change, PROBABILITY_PERCENT);
        let impact_before = number(baseline, IMPACT);
        let impact_after = carried_over(number(post_change, IMPACT), impact_before);

        let expected_loss_before = probability_before / 100.0 * impact_before;
        let expected_loss_after = probability_after / 100.0 * impact_after;

        CategoryFields::RiskReduction(RiskReductionFields {
            expected_loss_before,
            expected_loss_after,
            delta_probability_points: probability_before - probability_after,
            delta: expected_loss_before - expected_loss_after,
        })
    }
}
