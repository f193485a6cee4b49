//! Frequency normalization.
//!
//! Two unit systems exist in indicator data: the typed [`FrequencyUnit`]
//! enumeration used by the normalized schema, and free-text Portuguese period
//! labels used by the legacy schema (see [`legacy`]). Both resolve to an
//! annualized occurrence count before any cost math happens.

pub mod legacy;

pub use legacy::{legacy_monthly_occurrences, LegacyFrequency, LegacyPeriod};

use crate::core::labels::fold_label;
use crate::core::numeric::to_number;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Recurrence unit of a measured activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyUnit {
    Hour,
    Day,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 6] = [
        FrequencyUnit::Hour,
        FrequencyUnit::Day,
        FrequencyUnit::Week,
        FrequencyUnit::Month,
        FrequencyUnit::Quarter,
        FrequencyUnit::Year,
    ];

    /// Occurrences per year of one event per unit.
    pub const fn multiplier(self) -> f64 {
        match self {
            FrequencyUnit::Hour => 8760.0,
            FrequencyUnit::Day => 365.0,
            FrequencyUnit::Week => 52.0,
            FrequencyUnit::Month => 12.0,
            FrequencyUnit::Quarter => 4.0,
            FrequencyUnit::Year => 1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FrequencyUnit::Hour => "hour",
            FrequencyUnit::Day => "day",
            FrequencyUnit::Week => "week",
            FrequencyUnit::Month => "month",
            FrequencyUnit::Quarter => "quarter",
            FrequencyUnit::Year => "year",
        }
    }

    /// Parse a unit symbol, accepting plural, adverbial and Portuguese forms.
    pub fn parse(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "hour" | "hours" | "hourly" | "h" | "hora" | "horas" => Some(FrequencyUnit::Hour),
            "day" | "days" | "daily" | "d" | "dia" | "dias" => Some(FrequencyUnit::Day),
            "week" | "weeks" | "weekly" | "w" | "semana" | "semanas" => Some(FrequencyUnit::Week),
            "month" | "months" | "monthly" | "m" | "mes" | "meses" => Some(FrequencyUnit::Month),
            "quarter" | "quarters" | "quarterly" | "q" | "trimestre" | "trimestres" => {
                Some(FrequencyUnit::Quarter)
            }
            "year" | "years" | "yearly" | "annual" | "y" | "ano" | "anos" => {
                Some(FrequencyUnit::Year)
            }
            _ => None,
        }
    }

    /// Annualized occurrence count of `value` events per unit.
    pub fn annualize(self, value: f64) -> f64 {
        value * self.multiplier()
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrequencyUnit::parse(s).ok_or_else(|| format!("unknown frequency unit '{s}'"))
    }
}

/// Multiplier for a unit symbol; unrecognized units fall back to monthly (12).
pub fn frequency_multiplier(unit: &str) -> f64 {
    frequency_multiplier_or(unit, FrequencyUnit::Month)
}

/// Multiplier for a unit symbol with an explicit fallback unit.
pub fn frequency_multiplier_or(unit: &str, fallback: FrequencyUnit) -> f64 {
    FrequencyUnit::parse(unit).unwrap_or(fallback).multiplier()
}

/// Annualized occurrences for a raw `(value, unit)` pair.
///
/// ```
/// use roimap::frequency::annual_frequency;
/// use serde_json::json;
///
/// assert_eq!(annual_frequency(Some(&json!(20)), "month"), 240.0);
/// assert_eq!(annual_frequency(Some(&json!("2")), "week"), 104.0);
/// assert_eq!(annual_frequency(None, "day"), 0.0);
/// ```
pub fn annual_frequency(value: Option<&Value>, unit: &str) -> f64 {
    to_number(value, 0.0) * frequency_multiplier(unit)
}
