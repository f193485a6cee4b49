//! Category-specific variant calculators.
//!
//! Each [`IndicatorCategory`] maps to exactly one calculator that turns a
//! category-shaped baseline/post-change payload pair into
//! [`CategoryFields`]. Calculators are stateless unit structs behind a static
//! registry; dispatch is a plain match on the closed category enum.
//!
//! Every numeric read defaults to zero, so calculators never fail.

pub mod financial;
pub mod operational;
pub mod productivity;
pub mod risk;
pub mod satisfaction;

pub use financial::{
    CostReductionCalculator, CostReductionFields, MarginImprovementCalculator,
    MarginImprovementFields, RevenueIncreaseCalculator, RevenueIncreaseFields,
};
pub use operational::{
    AnalyticalCapacityCalculator, AnalyticalCapacityFields, DecisionQualityCalculator,
    DecisionQualityFields, SpeedCalculator, SpeedFields,
};
pub use productivity::{ProductivityCalculator, ProductivityFields};
pub use risk::{RiskReductionCalculator, RiskReductionFields};
pub use satisfaction::{SatisfactionCalculator, SatisfactionFields};

use crate::core::types::IndicatorCategory;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub trait CategoryCalculator: Send + Sync {
    fn category(&self) -> IndicatorCategory;
    fn calculate(&self, baseline: &Value, post_change: &Value) -> CategoryFields;
}

/// Category-specific results, tagged with the category name when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CategoryFields {
    Productivity(ProductivityFields),
    AnalyticalCapacity(AnalyticalCapacityFields),
    RevenueIncrease(RevenueIncreaseFields),
    CostReduction(CostReductionFields),
    RiskReduction(RiskReductionFields),
    DecisionQuality(DecisionQualityFields),
    Speed(SpeedFields),
    Satisfaction(SatisfactionFields),
    MarginImprovement(MarginImprovementFields),
}

impl CategoryFields {
    pub fn category(&self) -> IndicatorCategory {
        match self {
            CategoryFields::Productivity(_) => IndicatorCategory::Productivity,
            CategoryFields::AnalyticalCapacity(_) => IndicatorCategory::AnalyticalCapacity,
            CategoryFields::RevenueIncrease(_) => IndicatorCategory::RevenueIncrease,
            CategoryFields::CostReduction(_) => IndicatorCategory::CostReduction,
            CategoryFields::RiskReduction(_) => IndicatorCategory::RiskReduction,
            CategoryFields::DecisionQuality(_) => IndicatorCategory::DecisionQuality,
            CategoryFields::Speed(_) => IndicatorCategory::Speed,
            CategoryFields::Satisfaction(_) => IndicatorCategory::Satisfaction,
            CategoryFields::MarginImprovement(_) => IndicatorCategory::MarginImprovement,
        }
    }

    /// Headline delta for display: annual money where the category has one,
    /// otherwise the raw delta in the category's own unit.
    pub fn headline_delta(&self) -> f64 {
        match self {
            CategoryFields::Productivity(f) => f.delta_annual,
            CategoryFields::AnalyticalCapacity(f) => f.delta_annual,
            CategoryFields::RevenueIncrease(f) => f.delta,
            CategoryFields::CostReduction(f) => f.delta_annual,
            CategoryFields::RiskReduction(f) => f.delta,
            CategoryFields::DecisionQuality(f) => f.delta_annual,
            CategoryFields::Speed(f) => f.delta_annual,
            CategoryFields::Satisfaction(f) => f.delta_points,
            CategoryFields::MarginImprovement(f) => f.delta_annual,
        }
    }
}

static PRODUCTIVITY: ProductivityCalculator = ProductivityCalculator;
static ANALYTICAL_CAPACITY: AnalyticalCapacityCalculator = AnalyticalCapacityCalculator;
static REVENUE_INCREASE: RevenueIncreaseCalculator = RevenueIncreaseCalculator;
static COST_REDUCTION: CostReductionCalculator = CostReductionCalculator;
static RISK_REDUCTION: RiskReductionCalculator = RiskReductionCalculator;
static DECISION_QUALITY: DecisionQualityCalculator = DecisionQualityCalculator;
static SPEED: SpeedCalculator = SpeedCalculator;
static SATISFACTION: SatisfactionCalculator = SatisfactionCalculator;
static MARGIN_IMPROVEMENT: MarginImprovementCalculator = MarginImprovementCalculator;

impl IndicatorCategory {
    pub fn calculator(self) -> &'static dyn CategoryCalculator {
        match self {
            IndicatorCategory::Productivity => &PRODUCTIVITY,
            IndicatorCategory::AnalyticalCapacity => &ANALYTICAL_CAPACITY,
            IndicatorCategory::RevenueIncrease => &REVENUE_INCREASE,
            IndicatorCategory::CostReduction => &COST_REDUCTION,
            IndicatorCategory::RiskReduction => &RISK_REDUCTION,
            IndicatorCategory::DecisionQuality => &DECISION_QUALITY,
            IndicatorCategory::Speed => &SPEED,
            IndicatorCategory::Satisfaction => &SATISFACTION,
            IndicatorCategory::MarginImprovement => &MARGIN_IMPROVEMENT,
        }
    }
}

/// Look up the calculator for a category label; `None` for unknown labels.
///
/// ```
/// use roimap::category::get_category_calculator;
/// use serde_json::json;
///
/// let calc = get_category_calculator("RevenueIncrease").unwrap();
/// let fields = calc.calculate(&json!({"revenue": 10000}), &json!({"revenue": 13000}));
/// assert_eq!(fields.headline_delta(), 3000.0);
/// assert!(get_category_calculator("Astrology").is_none());
/// ```
pub fn get_category_calculator(category: &str) -> Option<&'static dyn CategoryCalculator> {
    IndicatorCategory::parse(category).map(IndicatorCategory::calculator)
}

/// Annualize a monthly delta.
pub(crate) fn annualize_monthly(delta_monthly: f64) -> f64 {
    delta_monthly * 12.0
}

/// Relative change in percent; `0` when the base is not positive.
pub(crate) fn percent_change(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        (after - before) / before * 100.0
    } else {
        0.0
    }
}

/// Relative reduction in percent; `0` when the base is not positive.
pub(crate) fn percent_reduction(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        (before - after) / before * 100.0
    } else {
        0.0
    }
}

/// Post-change value, falling back to the baseline one when the post-change
/// payload leaves it at zero.
pub(crate) fn carried_over(after: f64, before: f64) -> f64 {
    if after == 0.0 {
        before
    } else {
        after
    }
}
