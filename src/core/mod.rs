//! Core types shared by every stage of the calculation pipeline.

pub mod errors;
pub mod labels;
pub mod numeric;
pub mod ratio;
pub mod types;

pub use errors::{Error, Result};
pub use numeric::{parse_number, to_number};
pub use types::{
    BillingPeriod, CanonicalView, IndicatorCategory, PersonTimeEntry, ProjectCosts, Scenario,
    SchemaKind, ToolBilling, ToolCostEntry,
};
