//! Input adapter: raw indicator records to [`crate::core::CanonicalView`].

pub mod adapter;
pub mod fields;

pub use adapter::{adapt, adapt_with, is_normalized};

use crate::core::types::{IndicatorCategory, ProjectCosts};
use serde_json::Value;

const ID: &[&str] = &["id", "indicatorId", "indicator_id"];
const PROJECT_ID: &[&str] = &["projectId", "project_id"];
const CATEGORY: &[&str] = &["category"];
const IMPLEMENTATION_COST: &[&str] = &["implementationCost", "implementation_cost"];
const MONTHLY_MAINTENANCE_COST: &[&str] = &["monthlyMaintenanceCost", "monthly_maintenance_cost"];

pub fn indicator_id(record: &Value) -> Option<String> {
    fields::identity(record, ID)
}

pub fn indicator_project_id(record: &Value) -> Option<String> {
    fields::identity(record, PROJECT_ID)
}

/// Category of a record; `None` when missing or unrecognized.
pub fn indicator_category(record: &Value) -> Option<IndicatorCategory> {
    fields::text(record, CATEGORY).and_then(IndicatorCategory::parse)
}

/// The category payloads stored with an indicator, if both are present.
pub fn category_payloads(record: &Value) -> Option<(&Value, &Value)> {
    let baseline = fields::lookup(record, adapter::BASELINE_DATA)?;
    let post_change = fields::lookup(record, adapter::POST_CHANGE_DATA)?;
    Some((baseline, post_change))
}

/// Cost terms of a project record; missing or negative amounts are zero.
pub fn project_costs(project: &Value) -> ProjectCosts {
    ProjectCosts::new(
        fields::non_negative_number(project, IMPLEMENTATION_COST),
        fields::non_negative_number(project, MONTHLY_MAINTENANCE_COST),
    )
}
