//! Revenue, margin and cost categories.

use super::{annualize_monthly, CategoryCalculator, CategoryFields};
use crate::core::types::IndicatorCategory;
use crate::input::fields::{lookup, number};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const REVENUE: &[&str] = &["revenue", "receita"];
const COST: &[&str] = &["cost", "custo"];
const MARGIN_PERCENT: &[&str] = &["marginPercent", "margin_percent", "margin"];
const MONTHLY_COST: &[&str] = &["monthlyCost", "monthly_cost", "cost", "custo"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevenueIncreaseFields {
    pub revenue_before: f64,
    pub revenue_after: f64,
    /// Raw difference; not annualized.
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueIncreaseCalculator;

impl CategoryCalculator for RevenueIncreaseCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::RevenueIncrease
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let revenue_before = number(baseline, REVENUE);
        let revenue_after = number(post_change, REVENUE);
        CategoryFields::RevenueIncrease(RevenueIncreaseFields {
            revenue_before,
            revenue_after,
            delta: revenue_after - revenue_before,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarginImprovementFields {
    pub margin_before_percent: f64,
    pub margin_after_percent: f64,
    pub delta_margin_points: f64,
    pub gross_profit_before: f64,
    pub gross_profit_after: f64,
    pub delta_monthly: f64,
    pub delta_annual: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarginImprovementCalculator;

impl CategoryCalculator for MarginImprovementCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::MarginImprovement
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let gross_profit_before = number(baseline, REVENUE) - number(baseline, COST);
        let gross_profit_after = number(post_change, REVENUE) - number(post_change, COST);
        let margin_before_percent = margin_percent(baseline);
        let margin_after_percent = margin_percent(post_change);
        let delta_monthly = gross_profit_after - gross_profit_before;

        CategoryFields::MarginImprovement(MarginImprovementFields {
            margin_before_percent,
            margin_after_percent,
            delta_margin_points: margin_after_percent - margin_before_percent,
            gross_profit_before,
            gross_profit_after,
            delta_monthly,
            delta_annual: annualize_monthly(delta_monthly),
        })
    }
}

/// Stated margin, or `(revenue - cost) / revenue` when none is given.
fn margin_percent(payload: &Value) -> f64 {
    if lookup(payload, MARGIN_PERCENT).is_some() {
        return number(payload, MARGIN_PERCENT);
    }
    let revenue = number(payload, REVENUE);
    if revenue > 0.0 {
        (revenue - number(payload, COST)) / revenue * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CostReductionFields {
    pub cost_before: f64,
    pub cost_after: f64,
    /// Positive when costs went down.
    pub delta_monthly: f64,
    pub delta_annual: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CostReductionCalculator;

impl CategoryCalculator for CostReductionCalculator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::CostReduction
    }

    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields {
        let cost_before = number(baseline, MONTHLY_COST);
        let cost_after = number(post_change, MONTHLY_COST);
        let delta_monthly = cost_before - cost_after;
        CategoryFields::CostReduction(CostReductionFields {
            cost_before,
            cost_after,
            delta_monthly,
            delta_annual: annualize_monthly(delta_monthly),
        })
    }
}
