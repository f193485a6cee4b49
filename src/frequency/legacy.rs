//! Legacy period labels.
//!
//! The legacy schema stores a per-period quantity next to a human label such
//! as `"Diário"`. Labels approximate a monthly occurrence count; callers
//! multiply by 12 for the annualized form.

use crate::core::labels::fold_label;
use serde::{Deserialize, Serialize};

/// Average weeks per month used by the legacy dashboard.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Working days per month used by the legacy dashboard.
pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegacyPeriod {
    Daily,
    Weekly,
    /// Also the fallback for unrecognized labels.
    #[default]
    Monthly,
}

impl LegacyPeriod {
    pub fn parse(label: &str) -> Self {
        match fold_label(label).as_str() {
            "diario" | "diaria" | "daily" => LegacyPeriod::Daily,
            "semanal" | "weekly" => LegacyPeriod::Weekly,
            _ => LegacyPeriod::Monthly,
        }
    }

    pub const fn monthly_factor(self) -> f64 {
        match self {
            LegacyPeriod::Daily => DAYS_PER_MONTH,
            LegacyPeriod::Weekly => WEEKS_PER_MONTH,
            LegacyPeriod::Monthly => 1.0,
        }
    }
}

/// Approximate monthly occurrences for a per-period quantity.
pub fn legacy_monthly_occurrences(quantity: f64, period_label: &str) -> f64 {
    quantity * LegacyPeriod::parse(period_label).monthly_factor()
}

/// A legacy per-person frequency: `quantity` occurrences per `period`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LegacyFrequency {
    pub quantity: f64,
    pub period: LegacyPeriod,
}

impl LegacyFrequency {
    pub fn new(quantity: f64, period: LegacyPeriod) -> Self {
        Self { quantity, period }
    }

    pub fn monthly_occurrences(&self) -> f64 {
        self.quantity * self.period.monthly_factor()
    }

    pub fn annual_occurrences(&self) -> f64 {
        self.monthly_occurrences() * 12.0
    }
}
