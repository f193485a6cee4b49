//! Annualized labor and tool cost calculators.
//!
//! Each entry contributes independently; a malformed entry contributes zero
//! (its fields were already coerced by the input adapter) and never aborts
//! the aggregate.

use crate::core::numeric::sum;
use crate::core::types::{BillingPeriod, PersonTimeEntry, ToolBilling, ToolCostEntry};

/// Annual occurrences an entry works at.
///
/// Legacy entries carry their own frequency; normalized entries share the
/// scenario's annual frequency.
pub fn entry_annual_occurrences(entry: &PersonTimeEntry, annual_frequency: f64) -> f64 {
    entry
        .legacy_frequency
        .map(|freq| freq.annual_occurrences())
        .unwrap_or(annual_frequency)
}

/// Annualized hours spent by all entries.
pub fn labor_hours(entries: &[PersonTimeEntry], annual_frequency: f64) -> f64 {
    sum(entries
        .iter()
        .map(|entry| entry.hours_per_occurrence() * entry_annual_occurrences(entry, annual_frequency)))
}

/// Annualized labor cost of all entries.
pub fn labor_cost(entries: &[PersonTimeEntry], annual_frequency: f64) -> f64 {
    sum(entries.iter().map(|entry| {
        entry.hours_per_occurrence()
            * entry_annual_occurrences(entry, annual_frequency)
            * entry.hourly_rate
    }))
}

/// Annualized cost of a single tool entry.
pub fn tool_entry_cost(entry: &ToolCostEntry, annual_frequency: f64) -> f64 {
    match entry.billing {
        ToolBilling::Recurring {
            monthly_cost,
            cost_per_execution,
            ..
        } => monthly_cost * 12.0 + cost_per_execution.map_or(0.0, |cost| cost * annual_frequency),
        ToolBilling::Flat {
            value,
            period: BillingPeriod::Annual,
        } => value,
        ToolBilling::Flat {
            value,
            period: BillingPeriod::Monthly,
        } => value * 12.0,
    }
}

/// Annualized cost of all tool entries.
pub fn tool_cost(entries: &[ToolCostEntry], annual_frequency: f64) -> f64 {
    sum(entries
        .iter()
        .map(|entry| tool_entry_cost(entry, annual_frequency)))
}

/// Mean hourly rate across persons with a positive rate, `0.0` if none.
pub fn average_hourly_rate(entries: &[PersonTimeEntry]) -> f64 {
    let rates: Vec<f64> = entries
        .iter()
        .map(|entry| entry.hourly_rate)
        .filter(|rate| *rate > 0.0)
        .collect();
    crate::core::numeric::mean(&rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Scenario;
    use crate::frequency::{LegacyFrequency, LegacyPeriod};

    fn person(rate: f64, minutes: f64) -> PersonTimeEntry {
        PersonTimeEntry {
            scenario: Scenario::Baseline,
            name: "p".into(),
            role: String::new(),
            hourly_rate: rate,
            minutes_per_occurrence: minutes,
            legacy_frequency: None,
        }
    }

    fn recurring(monthly: f64, per_execution: Option<f64>) -> ToolCostEntry {
        ToolCostEntry {
            scenario: Scenario::PostChange,
            name: "t".into(),
            billing: ToolBilling::Recurring {
                monthly_cost: monthly,
                cost_per_execution: per_execution,
                execution_minutes: None,
            },
        }
    }

    #[test]
    fn test_labor_hours_normalized() {
        let entries = vec![person(50.0, 60.0), person(30.0, 30.0)];
        assert_eq!(labor_hours(&entries, 240.0), 360.0);
        assert_eq!(labor_cost(&entries, 240.0), 240.0 * 50.0 + 120.0 * 30.0);
    }

    #[test]
    fn test_legacy_entries_use_their_own_frequency() {
        let mut legacy = person(60.0, 30.0);
        legacy.legacy_frequency = Some(LegacyFrequency::new(2.0, LegacyPeriod::Weekly));
        let hours = labor_hours(&[legacy.clone()], 9999.0);
        let expected = 0.5 * 2.0 * 4.33 * 12.0;
        assert!((hours - expected).abs() < 1e-9);
        assert!((labor_cost(&[legacy], 9999.0) - expected * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_entries_are_zero() {
        assert_eq!(labor_hours(&[], 100.0), 0.0);
        assert_eq!(tool_cost(&[], 100.0), 0.0);
    }

    #[test]
    fn test_tool_cost_recurring_with_execution_charge() {
        let tools = vec![recurring(100.0, Some(0.5)), recurring(10.0, None)];
        assert_eq!(tool_cost(&tools, 240.0), 1200.0 + 120.0 + 120.0);
    }

    #[test]
    fn test_tool_cost_flat_periods() {
        let annual = ToolCostEntry {
            scenario: Scenario::Baseline,
            name: "license".into(),
            billing: ToolBilling::Flat {
                value: 1200.0,
                period: BillingPeriod::Annual,
            },
        };
        let monthly = ToolCostEntry {
            billing: ToolBilling::Flat {
                value: 99.0,
                period: BillingPeriod::Monthly,
            },
            ..annual.clone()
        };
        assert_eq!(tool_entry_cost(&annual, 500.0), 1200.0);
        assert_eq!(tool_entry_cost(&monthly, 500.0), 1188.0);
    }

    #[test]
    fn test_average_rate_ignores_unpriced_persons() {
        let entries = vec![person(0.0, 10.0), person(40.0, 10.0), person(60.0, 10.0)];
        assert_eq!(average_hourly_rate(&entries), 50.0);
        assert_eq!(average_hourly_rate(&[person(0.0, 10.0)]), 0.0);
    }
}
