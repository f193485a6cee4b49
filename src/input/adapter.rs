//! Schema detection and conversion into [`CanonicalView`].
//!
//! Normalized records carry `frequencyValue`/`frequencyUnit` and person/tool
//! rows as arrays. Legacy records nest everything under `baselineData` and
//! `postChangeData`, with a per-person frequency label. Downstream
//! calculators only ever see the canonical view.

use super::fields::{array, has_any, lookup, non_negative_number, optional_number, text};
use crate::core::numeric::{sum, to_number};
use crate::core::types::{
    BillingPeriod, CanonicalView, PersonTimeEntry, Scenario, SchemaKind, ToolBilling,
    ToolCostEntry,
};
use crate::frequency::{FrequencyUnit, LegacyFrequency, LegacyPeriod};
use serde_json::Value;

pub(crate) const FREQUENCY_VALUE: &[&str] = &["frequencyValue", "frequency_value"];
pub(crate) const FREQUENCY_UNIT: &[&str] = &["frequencyUnit", "frequency_unit"];
const BASELINE_FREQUENCY_REAL: &[&str] = &["baselineFrequencyReal", "baseline_frequency_real"];
const BASELINE_FREQUENCY_DESIRED: &[&str] =
    &["baselineFrequencyDesired", "baseline_frequency_desired"];
const POST_CHANGE_FREQUENCY: &[&str] = &["postChangeFrequency", "post_change_frequency"];

const PERSONS_BASELINE: &[&str] = &["personsBaseline", "persons_baseline"];
const PERSONS_POST_CHANGE: &[&str] = &["personsPostChange", "persons_post_change"];
const TOOLS_BASELINE: &[&str] = &["toolsBaseline", "tools_baseline"];
const TOOLS_POST_CHANGE: &[&str] = &["toolsPostChange", "tools_post_change"];
const PERSONS: &[&str] = &["persons", "people"];
const TOOLS: &[&str] = &["tools"];

pub(crate) const BASELINE_DATA: &[&str] = &["baselineData", "baseline_data"];
pub(crate) const POST_CHANGE_DATA: &[&str] = &["postChangeData", "post_change_data"];

pub(crate) const HOURLY_RATE: &[&str] = &["hourlyRate", "hourly_rate"];
pub(crate) const MINUTES: &[&str] = &[
    "timeSpentMinutes",
    "time_spent_minutes",
    "minutesSpent",
    "minutes_spent",
    "minutes",
];
pub(crate) const FREQUENCY_QUANTITY: &[&str] = &["frequencyQuantity", "frequency_quantity"];
pub(crate) const FREQUENCY_PERIOD: &[&str] = &["frequencyPeriod", "frequency_period"];
const NAME: &[&str] = &["name"];
const ROLE: &[&str] = &["role"];
const SCENARIO: &[&str] = &["scenario"];

const MONTHLY_COST: &[&str] = &["monthlyCost", "monthly_cost"];
const COST_PER_EXECUTION: &[&str] = &["costPerExecution", "cost_per_execution"];
const EXECUTION_MINUTES: &[&str] = &[
    "executionTime",
    "execution_time",
    "executionMinutes",
    "execution_minutes",
];
const TOOL_VALUE: &[&str] = &["value"];
const TOOL_KIND: &[&str] = &["kind", "type"];

/// Whether a record uses the normalized schema.
pub fn is_normalized(record: &Value) -> bool {
    has_any(record, FREQUENCY_VALUE)
        || has_any(record, FREQUENCY_UNIT)
        || lookup(record, PERSONS_BASELINE).is_some_and(Value::is_array)
        || lookup(record, PERSONS_POST_CHANGE).is_some_and(Value::is_array)
}

/// Convert an indicator record using the monthly fallback unit.
pub fn adapt(record: &Value) -> CanonicalView {
    adapt_with(record, FrequencyUnit::Month)
}

/// Convert an indicator record; `default_unit` replaces missing or unknown units.
pub fn adapt_with(record: &Value, default_unit: FrequencyUnit) -> CanonicalView {
    if is_normalized(record) {
        adapt_normalized(record, default_unit)
    } else {
        adapt_legacy(record)
    }
}

fn adapt_normalized(record: &Value, default_unit: FrequencyUnit) -> CanonicalView {
    let base_annual = annualize(
        lookup(record, FREQUENCY_VALUE),
        text(record, FREQUENCY_UNIT),
        default_unit,
    );
    let override_annual = |keys: &[&str]| {
        lookup(record, keys)
            .filter(|value| value.is_object())
            .map(|value| frequency_override(value, default_unit))
    };

    let mut view = CanonicalView::empty(SchemaKind::Normalized);
    view.annual_frequency_baseline = override_annual(BASELINE_FREQUENCY_REAL).unwrap_or(base_annual);
    view.annual_frequency_post_change = override_annual(POST_CHANGE_FREQUENCY).unwrap_or(base_annual);
    view.annual_frequency_desired = override_annual(BASELINE_FREQUENCY_DESIRED);

    view.persons_baseline = array(record, PERSONS_BASELINE)
        .iter()
        .map(|row| normalized_person(row, Scenario::Baseline))
        .collect();
    view.persons_post_change = array(record, PERSONS_POST_CHANGE)
        .iter()
        .map(|row| normalized_person(row, Scenario::PostChange))
        .collect();
    view.tools_baseline = array(record, TOOLS_BASELINE)
        .iter()
        .map(|row| tool(row, Scenario::Baseline))
        .collect();
    view.tools_post_change = array(record, TOOLS_POST_CHANGE)
        .iter()
        .map(|row| tool(row, Scenario::PostChange))
        .collect();

    // Flat row lists as they come out of the person/tool tables.
    for row in array(record, PERSONS) {
        match row_scenario(row) {
            Some(Scenario::Baseline) => view
                .persons_baseline
                .push(normalized_person(row, Scenario::Baseline)),
            Some(Scenario::PostChange) => view
                .persons_post_change
                .push(normalized_person(row, Scenario::PostChange)),
            None => tracing::debug!("skipping person row without a scenario"),
        }
    }
    for row in array(record, TOOLS) {
        match row_scenario(row) {
            Some(Scenario::Baseline) => view.tools_baseline.push(tool(row, Scenario::Baseline)),
            Some(Scenario::PostChange) => {
                view.tools_post_change.push(tool(row, Scenario::PostChange))
            }
            None => tracing::debug!("skipping tool row without a scenario"),
        }
    }

    view
}

fn adapt_legacy(record: &Value) -> CanonicalView {
    let mut view = CanonicalView::empty(SchemaKind::Legacy);

    if let Some(data) = lookup(record, BASELINE_DATA) {
        view.persons_baseline = legacy_persons(data, Scenario::Baseline);
        view.tools_baseline = array(data, TOOLS)
            .iter()
            .map(|row| tool(row, Scenario::Baseline))
            .collect();
    }
    if let Some(data) = lookup(record, POST_CHANGE_DATA) {
        view.persons_post_change = legacy_persons(data, Scenario::PostChange);
        view.tools_post_change = array(data, TOOLS)
            .iter()
            .map(|row| tool(row, Scenario::PostChange))
            .collect();
    }

    // Per-person frequencies are summed, not averaged.
    view.annual_frequency_baseline = summed_legacy_frequency(&view.persons_baseline);
    view.annual_frequency_post_change = summed_legacy_frequency(&view.persons_post_change);
    view
}

fn summed_legacy_frequency(persons: &[PersonTimeEntry]) -> f64 {
    sum(persons
        .iter()
        .filter_map(|person| person.legacy_frequency)
        .map(|freq| freq.annual_occurrences()))
}

fn annualize(value: Option<&Value>, unit: Option<&str>, default_unit: FrequencyUnit) -> f64 {
    let unit = unit.and_then(FrequencyUnit::parse).unwrap_or(default_unit);
    unit.annualize(to_number(value, 0.0).max(0.0))
}

/// `{ "value": n, "unit": "week" }` override objects.
fn frequency_override(value: &Value, default_unit: FrequencyUnit) -> f64 {
    annualize(
        lookup(value, &["value", "frequencyValue", "frequency_value"]),
        text(value, &["unit", "frequencyUnit", "frequency_unit"]),
        default_unit,
    )
}

fn row_scenario(row: &Value) -> Option<Scenario> {
    text(row, SCENARIO).and_then(Scenario::parse)
}

fn person_base(row: &Value, scenario: Scenario) -> PersonTimeEntry {
    PersonTimeEntry {
        scenario,
        name: text(row, NAME).unwrap_or_default().to_string(),
        role: text(row, ROLE).unwrap_or_default().to_string(),
        hourly_rate: non_negative_number(row, HOURLY_RATE),
        minutes_per_occurrence: non_negative_number(row, MINUTES),
        legacy_frequency: None,
    }
}

fn normalized_person(row: &Value, scenario: Scenario) -> PersonTimeEntry {
    person_base(row, scenario)
}

fn legacy_persons(data: &Value, scenario: Scenario) -> Vec<PersonTimeEntry> {
    array(data, PERSONS)
        .iter()
        .map(|row| PersonTimeEntry {
            legacy_frequency: Some(legacy_frequency(row)),
            ..person_base(row, scenario)
        })
        .collect()
}

/// Reads `frequencyQuantity`/`frequencyPeriod` or a nested `frequency` object.
pub(crate) fn legacy_frequency(row: &Value) -> LegacyFrequency {
    let nested = lookup(row, &["frequency"]).filter(|value| value.is_object());
    let source = nested.unwrap_or(row);
    let quantity_keys: &[&str] = if nested.is_some() {
        &["quantity", "value"]
    } else {
        FREQUENCY_QUANTITY
    };
    let period_keys: &[&str] = if nested.is_some() {
        &["period", "unit"]
    } else {
        FREQUENCY_PERIOD
    };

    LegacyFrequency::new(
        non_negative_number(source, quantity_keys),
        text(source, period_keys)
            .map(LegacyPeriod::parse)
            .unwrap_or_default(),
    )
}

fn tool(row: &Value, scenario: Scenario) -> ToolCostEntry {
    let flat_period = text(row, TOOL_KIND).and_then(BillingPeriod::parse);
    let billing = match (flat_period, lookup(row, TOOL_VALUE)) {
        (Some(period), Some(_)) => ToolBilling::Flat {
            value: non_negative_number(row, TOOL_VALUE),
            period,
        },
        _ => ToolBilling::Recurring {
            monthly_cost: non_negative_number(row, MONTHLY_COST),
            cost_per_execution: optional_number(row, COST_PER_EXECUTION),
            execution_minutes: optional_number(row, EXECUTION_MINUTES),
        },
    };

    ToolCostEntry {
        scenario,
        name: text(row, NAME).unwrap_or_default().to_string(),
        billing,
    }
}
