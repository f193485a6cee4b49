use crate::core::ratio;
use crate::core::types::SchemaKind;
use serde::{Deserialize, Serialize};

/// Metrics for a single indicator.
///
/// Derived data: recomputed from source rows on every call and only ever
/// persisted as a cache. Intermediate hours and costs are kept so every
/// headline figure can be traced back to its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorMetrics {
    pub schema: SchemaKind,
    pub annual_frequency_baseline: f64,
    pub annual_frequency_post_change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_frequency_desired: Option<f64>,

    pub hours_baseline: f64,
    pub hours_post_change: f64,
    pub hours_saved: f64,

    pub labor_cost_baseline: f64,
    pub labor_cost_post_change: f64,
    pub tool_cost_baseline: f64,
    pub tool_cost_post_change: f64,
    pub total_cost_baseline: f64,
    pub total_cost_post_change: f64,

    pub avg_hourly_rate: f64,
    pub gross_savings_by_cost: f64,
    pub gross_savings_by_hours: f64,
    /// Larger of the cost-accounting and labor-value bases.
    pub gross_savings: f64,
    pub net_savings: f64,

    /// Always zero at indicator level; implementation cost is a project term.
    pub implementation_cost: f64,
    pub investment_year1: f64,
    #[serde(with = "ratio")]
    pub roi_percent: f64,
    #[serde(with = "ratio")]
    pub roi_steady_state: f64,
    #[serde(with = "ratio")]
    pub payback_months: f64,

    pub productivity_gain_percent: f64,
    pub capacity_gain_percent: f64,
    pub efficiency_percent: f64,
}

impl IndicatorMetrics {
    pub fn pays_back_immediately(&self) -> bool {
        self.payback_months == 0.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Hours saved: {:.1}h/yr | Gross: {:.2} | Net: {:.2} | ROI: {}% | Payback: {} months",
            self.hours_saved,
            self.gross_savings,
            self.net_savings,
            ratio::display(self.roi_percent, 1),
            ratio::display(self.payback_months, 1),
        )
    }
}
