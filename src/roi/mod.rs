//! Indicator and project ROI calculation.
//!
//! The pipeline is: raw record -> [`crate::input::adapt`] -> cost calculators
//! ([`costs`]) -> [`IndicatorMetrics`] -> [`ProjectMetrics`]. Every function
//! here is pure; the calculator holds only its immutable
//! [`CalculationContext`] and may be shared across threads.

pub mod costs;
pub mod models;
pub mod project;


pub use costs::{average_hourly_rate, labor_cost, labor_hours, tool_cost};
pub use models::IndicatorMetrics;
pub use project::{IndicatorSummary, ProjectMetrics};

use crate::core::types::{CanonicalView, ProjectCosts};
use crate::frequency::FrequencyUnit;
use crate::input;
use serde_json::Value;

/// Hourly rate assumed when hours were saved but no baseline person has a rate.
pub const DEFAULT_FALLBACK_HOURLY_RATE: f64 = 80.0;

/// Named defaults the engine falls back to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationContext {
    pub fallback_hourly_rate: f64,
    /// Replaces missing or unrecognized frequency units.
    pub default_frequency_unit: FrequencyUnit,
}

impl Default for CalculationContext {
    fn default() -> Self {
        Self {
            fallback_hourly_rate: DEFAULT_FALLBACK_HOURLY_RATE,
            default_frequency_unit: FrequencyUnit::Month,
        }
    }
}

/// ROI percentage of `gross` over `investment`.
///
/// Zero investment with positive savings is `+∞`; with no savings it is `0`.
pub fn return_percent(gross: f64, investment: f64) -> f64 {
    if investment > 0.0 {
        (gross - investment) / investment * 100.0
    } else if gross > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Months for `net_annual` savings to repay `implementation_cost`.
///
/// `+∞` unless monthly net savings are positive; `0` when there is nothing
/// to repay.
pub fn payback_months(implementation_cost: f64, net_annual: f64) -> f64 {
    let monthly = net_annual / 12.0;
    if monthly.is_nan() || monthly <= 0.0 {
        f64::INFINITY
    } else if implementation_cost == 0.0 {
        0.0
    } else {
        implementation_cost / monthly
    }
}

#[derive(Clone, Debug, Default)]
pub struct RoiCalculator {
    context: CalculationContext,
}

impl RoiCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: CalculationContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CalculationContext {
        &self.context
    }

    pub fn adapt(&self, record: &Value) -> CanonicalView {
        input::adapt_with(record, self.context.default_frequency_unit)
    }

    /// Metrics for a raw indicator record; `None` iff the record is `null`.
    pub fn compute_indicator_metrics(&self, record: &Value) -> Option<IndicatorMetrics> {
        if record.is_null() {
            return None;
        }
        Some(self.indicator_metrics(&self.adapt(record)))
    }

    /// Metrics for an already adapted view.
    pub fn indicator_metrics(&self, view: &CanonicalView) -> IndicatorMetrics {
        let freq_baseline = view.annual_frequency_baseline;
        let freq_post = view.annual_frequency_post_change;

        let hours_baseline = labor_hours(&view.persons_baseline, freq_baseline);
        let hours_post_change = labor_hours(&view.persons_post_change, freq_post);
        let hours_saved = (hours_baseline - hours_post_change).max(0.0);

        let labor_cost_baseline = labor_cost(&view.persons_baseline, freq_baseline);
        let labor_cost_post_change = labor_cost(&view.persons_post_change, freq_post);
        let tool_cost_baseline = tool_cost(&view.tools_baseline, freq_baseline);
        let tool_cost_post_change = tool_cost(&view.tools_post_change, freq_post);
        let total_cost_baseline = labor_cost_baseline + tool_cost_baseline;
        let total_cost_post_change = labor_cost_post_change + tool_cost_post_change;

        let gross_savings_by_cost = (total_cost_baseline - total_cost_post_change).max(0.0);

        let mut avg_hourly_rate = average_hourly_rate(&view.persons_baseline);
        if avg_hourly_rate == 0.0 && hours_saved > 0.0 {
            avg_hourly_rate = self.context.fallback_hourly_rate;
        }
        let gross_savings_by_hours = hours_saved * avg_hourly_rate;

        let gross_savings = gross_savings_by_cost.max(gross_savings_by_hours);
        let net_savings = gross_savings - tool_cost_post_change;

        let implementation_cost = 0.0;
        let investment_year1 = implementation_cost + tool_cost_post_change;

        let metrics = IndicatorMetrics {
            schema: view.schema,
            annual_frequency_baseline: freq_baseline,
            annual_frequency_post_change: freq_post,
            annual_frequency_desired: view.annual_frequency_desired,
            hours_baseline,
            hours_post_change,
            hours_saved,
            labor_cost_baseline,
            labor_cost_post_change,
            tool_cost_baseline,
            tool_cost_post_change,
            total_cost_baseline,
            total_cost_post_change,
            avg_hourly_rate,
            gross_savings_by_cost,
            gross_savings_by_hours,
            gross_savings,
            net_savings,
            implementation_cost,
            investment_year1,
            roi_percent: return_percent(gross_savings, investment_year1),
            roi_steady_state: return_percent(gross_savings, tool_cost_post_change),
            payback_months: payback_months(implementation_cost, net_savings),
            productivity_gain_percent: productivity_gain(hours_baseline, hours_post_change),
            capacity_gain_percent: capacity_gain(freq_baseline, freq_post),
            efficiency_percent: efficiency(
                hours_baseline,
                hours_post_change,
                freq_baseline,
                freq_post,
            ),
        };

        tracing::debug!(
            schema = ?metrics.schema,
            hours_saved = metrics.hours_saved,
            gross_savings = metrics.gross_savings,
            net_savings = metrics.net_savings,
            "computed indicator metrics"
        );
        metrics
    }

    pub fn compute_project_metrics(
        &self,
        project_id: &str,
        indicators: &[Value],
        project: &ProjectCosts,
    ) -> ProjectMetrics {
        project::aggregate(self, project_id, indicators, project)
    }
}

fn productivity_gain(hours_baseline: f64, hours_post_change: f64) -> f64 {
    if hours_baseline > 0.0 {
        (hours_baseline - hours_post_change) / hours_baseline * 100.0
    } else {
        0.0
    }
}

fn capacity_gain(freq_baseline: f64, freq_post: f64) -> f64 {
    if freq_baseline > 0.0 {
        (freq_post / freq_baseline - 1.0) * 100.0
    } else {
        0.0
    }
}

/// Change in average time per occurrence.
fn efficiency(hours_baseline: f64, hours_post: f64, freq_baseline: f64, freq_post: f64) -> f64 {
    if freq_baseline == 0.0 || freq_post == 0.0 {
        return 0.0;
    }
    let per_occurrence_before = hours_baseline / freq_baseline;
    let per_occurrence_after = hours_post / freq_post;
    if per_occurrence_before > 0.0 {
        (per_occurrence_before - per_occurrence_after) / per_occurrence_before * 100.0
    } else {
        0.0
    }
}

/// [`RoiCalculator::compute_indicator_metrics`] with default context.
pub fn compute_indicator_metrics(record: &Value) -> Option<IndicatorMetrics> {
    RoiCalculator::new().compute_indicator_metrics(record)
}

/// [`RoiCalculator::compute_project_metrics`] with default context.
pub fn compute_project_metrics(
    project_id: &str,
    indicators: &[Value],
    project: &ProjectCosts,
) -> ProjectMetrics {
    RoiCalculator::new().compute_project_metrics(project_id, indicators, project)
}
