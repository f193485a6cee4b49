//! Project-level aggregation.
//!
//! Sums indicator results and folds in the project's own cost terms:
//! implementation cost is taken from the project (never summed from
//! indicators) and maintenance is added to the recurring tool costs.

use super::{payback_months, return_percent, IndicatorMetrics, RoiCalculator};
use crate::core::numeric::{mean, sum};
use crate::core::ratio;
use crate::core::types::{IndicatorCategory, ProjectCosts};
use crate::input;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One indicator's contribution to a project summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    pub indicator_id: Option<String>,
    pub category: Option<IndicatorCategory>,
    pub metrics: IndicatorMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    pub project_id: String,
    pub total_indicators: usize,
    pub net_savings_annual_total: f64,
    pub gross_savings_annual_total: f64,
    pub hours_saved_annual_total: f64,
    pub implementation_cost_total: f64,
    pub recurring_cost_annual_total: f64,
    pub investment_year1: f64,
    #[serde(with = "ratio")]
    pub roi_overall: f64,
    #[serde(with = "ratio")]
    pub payback_avg_months: f64,
    /// Mean over indicators with a positive gain only.
    pub productivity_gain_avg: f64,
    /// Mean over indicators with a positive gain only.
    pub capacity_gain_avg: f64,
    /// Mean over indicators with a positive gain only.
    pub efficiency_gain_avg: f64,
    pub indicators: Vec<IndicatorSummary>,
}

/// Mean of the strictly positive, finite values. Non-positive gains are
/// excluded from the denominator rather than counted as zero.
pub fn positive_mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let positives: Vec<f64> = values
        .into_iter()
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect();
    mean(&positives)
}

pub(super) fn aggregate(
    calculator: &RoiCalculator,
    project_id: &str,
    indicators: &[Value],
    project: &ProjectCosts,
) -> ProjectMetrics {
    let _span = tracing::debug_span!("project_metrics", project_id).entered();

    let members: Vec<&Value> = indicators
        .iter()
        .filter(|record| input::indicator_project_id(record).as_deref() == Some(project_id))
        .collect();

    // Per-indicator work is independent; collect keeps input order so the
    // sequential reductions below are deterministic.
    let summaries: Vec<IndicatorSummary> = members
        .par_iter()
        .filter_map(|record| {
            calculator
                .compute_indicator_metrics(record)
                .map(|metrics| IndicatorSummary {
                    indicator_id: input::indicator_id(record),
                    category: input::indicator_category(record),
                    metrics,
                })
        })
        .collect();

    let metrics = || summaries.iter().map(|summary| &summary.metrics);

    let net_savings_annual_total = sum(metrics().map(|m| m.net_savings));
    let gross_savings_annual_total = sum(metrics().map(|m| m.gross_savings));
    let hours_saved_annual_total = sum(metrics().map(|m| m.hours_saved));

    let implementation_cost_total = project.implementation_cost.max(0.0);
    let recurring_cost_annual_total = sum(metrics().map(|m| m.tool_cost_post_change))
        + project.monthly_maintenance_cost.max(0.0) * 12.0;
    let investment_year1 = implementation_cost_total + recurring_cost_annual_total;

    let result = ProjectMetrics {
        project_id: project_id.to_string(),
        total_indicators: summaries.len(),
        net_savings_annual_total,
        gross_savings_annual_total,
        hours_saved_annual_total,
        implementation_cost_total,
        recurring_cost_annual_total,
        investment_year1,
        roi_overall: return_percent(gross_savings_annual_total, investment_year1),
        payback_avg_months: payback_months(implementation_cost_total, net_savings_annual_total),
        productivity_gain_avg: positive_mean(metrics().map(|m| m.productivity_gain_percent)),
        capacity_gain_avg: positive_mean(metrics().map(|m| m.capacity_gain_percent)),
        efficiency_gain_avg: positive_mean(metrics().map(|m| m.efficiency_percent)),
        indicators: summaries,
    };

    tracing::debug!(
        total_indicators = result.total_indicators,
        net_savings = result.net_savings_annual_total,
        "aggregated project metrics"
    );
    result
}
