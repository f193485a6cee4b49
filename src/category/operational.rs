//! Throughput-style categories: speed, analytical capacity and decision quality.
//!
//! Volume and unit-value fields (deliveries, value per analysis, decisions
//! per month) describe the workload rather than the change, so a post-change
//! payload that omits them inherits the baseline figure.

use super::{
    annualize_monthly, carried_over, percent_change, percent_reduction, CategoryCalculator,
    CategoryFields,
};
use crate::core::types::IndicatorCategory;
use crate::input::fields::number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const CYCLE_TIME_HOURS: &[&str] = &["cycleTimeHours", "cycle_time_hours", "cycleTime"];
const DELIVERIES_PER_MONTH: &[&str] = &["deliveriesPerMonth", "deliveries_per_month"];
const COST_PER_HOUR: &[&str] = &["costPerHour", "cost_per_hour", "hourlyRate", "hourly_rate"];

const ANALYSES_PER_MONTH: &[&str] = &["analysesPerMonth", "analyses_per_month"];
const VALUE_PER_ANALYSIS: &[&str] = &["valuePerAnalysis", "value_per_analysis"];

const ACCURACY_PERCENT: &[&str] = &["accuracyPercent", "accuracy_percent", "accuracy"];
const DECISIONS_PER_MONTH: &[&str] = &["decisionsPerMonth", "decisions_per_month"];
const VALUE_PER_DECISION: &[&str] = &["valuePerDecision", "value_per_decision"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpeedFields {
    pub cycle_time_before: f64,
    pub cycle_time_after: f64,
    /// Hours shaved off each cycle.
    pub delta_hours: f64,
    /// Reduction relative to the baseline cycle time.
    pub delta_percent: f64,
    pub delta_monthly: f64,
    pub delta_annual: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedCalculator;

impl CategoryCalculator for SpeedCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Speed
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let cycle_time_before = number(baseline, CYCLE_TIME_HOURS);
        let cycle_time_after = number(post_change, CYCLE_TIME_HOURS);
        let deliveries = carried_over(
            number(post_change, DELIVERIES_PER_MONTH),
            number(baseline, DELIVERIES_PER_MONTH),
        );
        let cost_per_hour = carried_over(
            number(post_change, COST_PER_HOUR),
            number(baseline, COST_PER_HOUR),
        );

        let delta_hours = cycle_time_before - cycle_time_after;
        let delta_monthly = delta_hours * deliveries * cost_per_hour;

        CategoryFields::Speed(SpeedFields {
            cycle_time_before,
            cycle_time_after,
            delta_hours,
            delta_percent: percent_reduction(cycle_time_before, cycle_time_after),
            delta_monthly,
            delta_annual: annualize_monthly(delta_monthly),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticalCapacityFields {
    pub analyses_before: f64,
    pub analyses_after: f64,
    pub delta_analyses: f64,
    /// Growth in monthly analyses. Distinct from the indicator-level
    /// frequency-based capacity gain.
    pub analysis_gain_percent: f64,
    pub delta_monthly: f64,
    pub delta_annual: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalCapacityCalculator;

impl CategoryCalculator for AnalyticalCapacityCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::AnalyticalCapacity
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let analyses_before = number(baseline, ANALYSES_PER_MONTH);
        let analyses_after = number(post_change, ANALYSES_PER_MONTH);
        let value_per_analysis = carried_over(
            number(post_change, VALUE_PER_ANALYSIS),
            number(baseline, VALUE_PER_ANALYSIS),
        );

        let delta_analyses = analyses_after - analyses_before;
        let delta_monthly = delta_analyses * value_per_analysis;

        CategoryFields::AnalyticalCapacity(AnalyticalCapacityFields {
            analyses_before,
            analyses_after,
            delta_analyses,
            analysis_gain_percent: percent_change(analyses_before, analyses_after),
            delta_monthly,
            delta_annual: annualize_monthly(delta_monthly),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DecisionQualityFields {
    pub accuracy_before_percent: f64,
    pub accuracy_after_percent: f64,
    pub delta_accuracy_points: f64,
    pub delta_monthly: f64,
    pub delta_annual: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionQualityCalculator;

impl CategoryCalculator for DecisionQualityCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::DecisionQuality
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let accuracy_before_percent = number(baseline, ACCURACY_PERCENT);
        let accuracy_after_percent = number(post_change, ACCURACY_PERCENT);
        let decisions = carried_over(
            number(post_change, DECISIONS_PER_MONTH),
            number(baseline, DECISIONS_PER_MONTH),
        );
        let value_per_decision = carried_over(
            number(post_change, VALUE_PER_DECISION),
            number(baseline, VALUE_PER_DECISION),
        );

        let delta_accuracy_points = accuracy_after_percent - accuracy_before_percent;
        let delta_monthly = delta_accuracy_points / 100.0 * decisions * value_per_decision;

        CategoryFields::DecisionQuality(DecisionQualityFields {
            accuracy_before_percent,
            accuracy_after_percent,
            delta_accuracy_points,
            delta_monthly,
            delta_annual: annualize_monthly(delta_monthly),
        })
    }
}
