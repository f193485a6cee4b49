use super::labels::{fold_label, kebab_from_pascal};
use crate::frequency::LegacyFrequency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indicator category. Determines which variant calculator applies and which
/// payload shape `baselineData` / `postChangeData` carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Productivity,
    AnalyticalCapacity,
    RevenueIncrease,
    CostReduction,
    RiskReduction,
    DecisionQuality,
    Speed,
    Satisfaction,
    MarginImprovement,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 9] = [
        IndicatorCategory::Productivity,
        IndicatorCategory::AnalyticalCapacity,
        IndicatorCategory::RevenueIncrease,
        IndicatorCategory::CostReduction,
        IndicatorCategory::RiskReduction,
        IndicatorCategory::DecisionQuality,
        IndicatorCategory::Speed,
        IndicatorCategory::Satisfaction,
        IndicatorCategory::MarginImprovement,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            IndicatorCategory::Productivity => "Productivity",
            IndicatorCategory::AnalyticalCapacity => "AnalyticalCapacity",
            IndicatorCategory::RevenueIncrease => "RevenueIncrease",
            IndicatorCategory::CostReduction => "CostReduction",
            IndicatorCategory::RiskReduction => "RiskReduction",
            IndicatorCategory::DecisionQuality => "DecisionQuality",
            IndicatorCategory::Speed => "Speed",
            IndicatorCategory::Satisfaction => "Satisfaction",
            IndicatorCategory::MarginImprovement => "MarginImprovement",
        }
    }

    /// Parse a category label.
    ///
    /// Accepts the PascalCase name, snake/kebab case, and the Portuguese
    /// labels stored by the legacy dashboard.
    pub fn parse(label: &str) -> Option<Self> {
        match kebab_from_pascal(label).as_str() {
            "productivity" | "produtividade" => Some(Self::Productivity),
            "analytical-capacity" | "capacidade-analitica" => Some(Self::AnalyticalCapacity),
            "revenue-increase" | "incremento-receita" | "aumento-receita" => {
                Some(Self::RevenueIncrease)
            }
            "cost-reduction" | "reducao-custo" | "reducao-de-custo" => Some(Self::CostReduction),
            "risk-reduction" | "reducao-risco" | "reducao-de-risco" => Some(Self::RiskReduction),
            "decision-quality" | "qualidade-decisao" | "qualidade-de-decisao" => {
                Some(Self::DecisionQuality)
            }
            "speed" | "velocidade" => Some(Self::Speed),
            "satisfaction" | "satisfacao" => Some(Self::Satisfaction),
            "margin-improvement" | "melhoria-margem" | "melhoria-de-margem" => {
                Some(Self::MarginImprovement)
            }
            _ => None,
        }
    }
}

impl fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorCategory::parse(s).ok_or_else(|| format!("unknown indicator category '{s}'"))
    }
}

/// Measurement scenario of a person or tool row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Baseline,
    PostChange,
}

impl Scenario {
    pub fn parse(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "baseline" | "before" | "antes" => Some(Scenario::Baseline),
            "post-change" | "postchange" | "after" | "depois" => Some(Scenario::PostChange),
            _ => None,
        }
    }
}

/// Time one person spends on each occurrence of the measured activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonTimeEntry {
    pub scenario: Scenario,
    pub name: String,
    pub role: String,
    pub hourly_rate: f64,
    pub minutes_per_occurrence: f64,
    /// Per-person frequency; only the legacy schema sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_frequency: Option<LegacyFrequency>,
}

impl PersonTimeEntry {
    pub fn hours_per_occurrence(&self) -> f64 {
        self.minutes_per_occurrence / 60.0
    }
}

/// Billing period of a flat legacy tool cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn parse(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "monthly" | "month" | "mensal" => Some(BillingPeriod::Monthly),
            "annual" | "yearly" | "year" | "anual" => Some(BillingPeriod::Annual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolBilling {
    /// Subscription plus optional per-execution charge.
    Recurring {
        monthly_cost: f64,
        cost_per_execution: Option<f64>,
        execution_minutes: Option<f64>,
    },
    /// Legacy single value billed monthly or annually.
    Flat { value: f64, period: BillingPeriod },
}

/// Tooling or licensing cost attached to one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCostEntry {
    pub scenario: Scenario,
    pub name: String,
    pub billing: ToolBilling,
}

/// Which input representation an indicator record used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Normalized,
    Legacy,
}

/// Schema-independent view of one indicator's inputs.
///
/// Produced by [`crate::input::adapt`]; every calculator works on this shape
/// and never on raw records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalView {
    pub schema: SchemaKind,
    pub persons_baseline: Vec<PersonTimeEntry>,
    pub persons_post_change: Vec<PersonTimeEntry>,
    pub tools_baseline: Vec<ToolCostEntry>,
    pub tools_post_change: Vec<ToolCostEntry>,
    pub annual_frequency_baseline: f64,
    pub annual_frequency_post_change: f64,
    /// Target frequency the team wants to reach; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_frequency_desired: Option<f64>,
}

impl CanonicalView {
    pub fn empty(schema: SchemaKind) -> Self {
        Self {
            schema,
            persons_baseline: Vec::new(),
            persons_post_change: Vec::new(),
            tools_baseline: Vec::new(),
            tools_post_change: Vec::new(),
            annual_frequency_baseline: 0.0,
            annual_frequency_post_change: 0.0,
            annual_frequency_desired: None,
        }
    }
}

/// Project-level cost terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCosts {
    /// One-time implementation cost.
    #[serde(default)]
    pub implementation_cost: f64,
    #[serde(default)]
    pub monthly_maintenance_cost: f64,
}

impl ProjectCosts {
    pub fn new(implementation_cost: f64, monthly_maintenance_cost: f64) -> Self {
        Self {
            implementation_cost,
            monthly_maintenance_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_forms() {
        assert_eq!(
            IndicatorCategory::parse("MarginImprovement"),
            Some(IndicatorCategory::MarginImprovement)
        );
        assert_eq!(
            IndicatorCategory::parse("revenue_increase"),
            Some(IndicatorCategory::RevenueIncrease)
        );
        assert_eq!(
            IndicatorCategory::parse("Redução de Custo"),
            Some(IndicatorCategory::CostReduction)
        );
        assert_eq!(
            IndicatorCategory::parse("capacidade-analítica"),
            Some(IndicatorCategory::AnalyticalCapacity)
        );
        assert_eq!(IndicatorCategory::parse("Vibes"), None);
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in IndicatorCategory::ALL {
            assert_eq!(category.to_string().parse::<IndicatorCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!(Scenario::parse("post_change"), Some(Scenario::PostChange));
        assert_eq!(Scenario::parse("Baseline"), Some(Scenario::Baseline));
        assert_eq!(Scenario::parse("during"), None);
    }

    #[test]
    fn test_billing_period_parse() {
        assert_eq!(BillingPeriod::parse("Anual"), Some(BillingPeriod::Annual));
        assert_eq!(BillingPeriod::parse("monthly"), Some(BillingPeriod::Monthly));
        assert_eq!(BillingPeriod::parse("weekly"), None);
    }
}
