// Shared fixtures for roimap integration tests
#![allow(dead_code)]

use indoc::indoc;
use serde_json::Value;
use std::path::PathBuf;

/// One analyst, 20 occurrences a month at R$50/h, 60 minutes down to 10.
pub const REFERENCE_INDICATOR: &str = indoc! {r#"
    {
        "id": "ind-ref",
        "projectId": "proj-1",
        "category": "Productivity",
        "frequencyValue": 20,
        "frequencyUnit": "month",
        "personsBaseline": [
            {"name": "Ana", "role": "Analyst", "hourlyRate": 50, "timeSpentMinutes": 60}
        ],
        "personsPostChange": [
            {"name": "Ana", "role": "Analyst", "hourlyRate": 50, "timeSpentMinutes": 10}
        ]
    }
"#};

/// Legacy-shaped record: everything nested under the scenario payloads.
pub const LEGACY_INDICATOR: &str = indoc! {r#"
    {
        "id": "ind-legacy",
        "projectId": "proj-1",
        "category": "Productivity",
        "baselineData": {
            "persons": [
                {"name": "Bia", "hourlyRate": "40", "timeSpentMinutes": 45,
                 "frequencyQuantity": 2, "frequencyPeriod": "Semanal"},
                {"name": "Caio", "hourlyRate": 60, "timeSpentMinutes": 30,
                 "frequency": {"quantity": 1, "period": "Mensal"}}
            ],
            "tools": [{"name": "Planilha", "value": 0, "kind": "monthly"}]
        },
        "postChangeData": {
            "persons": [
                {"name": "Bia", "hourlyRate": "40", "timeSpentMinutes": 15,
                 "frequencyQuantity": 2, "frequencyPeriod": "Semanal"},
                {"name": "Caio", "hourlyRate": 60, "timeSpentMinutes": 10,
                 "frequency": {"quantity": 1, "period": "Mensal"}}
            ],
            "tools": [{"name": "Automação", "value": 1200, "kind": "annual"}]
        }
    }
"#};

/// Revenue indicator with no labor rows; only category payloads.
pub const REVENUE_INDICATOR: &str = indoc! {r#"
    {
        "id": "ind-rev",
        "projectId": "proj-1",
        "category": "RevenueIncrease",
        "frequencyValue": 1,
        "frequencyUnit": "month",
        "baselineData": {"revenue": 10000},
        "postChangeData": {"revenue": 13000}
    }
"#};

pub fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("fixture is valid JSON")
}

pub fn reference_indicator() -> Value {
    parse(REFERENCE_INDICATOR)
}

pub fn legacy_indicator() -> Value {
    parse(LEGACY_INDICATOR)
}

pub fn revenue_indicator() -> Value {
    parse(REVENUE_INDICATOR)
}

/// `{project, indicators}` document as consumed by `roimap project`.
pub fn project_document() -> Value {
    serde_json::json!({
        "project": {
            "id": "proj-1",
            "implementationCost": 6000,
            "monthlyMaintenanceCost": 50
        },
        "indicators": [reference_indicator(), legacy_indicator(), revenue_indicator()]
    })
}

pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

// Helper to write a JSON fixture into a temporary directory
pub fn write_json(dir: &tempfile::TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap())
        .expect("Failed to write fixture");
    path
}
