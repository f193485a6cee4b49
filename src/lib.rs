//! ROI engine for process-improvement indicators.
//!
//! Raw indicator records (JSON, in the normalized or the legacy schema) are
//! adapted into a canonical view, costed, and reduced to per-indicator and
//! per-project ROI metrics. Category calculators derive category-specific
//! deltas from the stored baseline/post-change payloads.
//!
//! ```
//! use roimap::compute_indicator_metrics;
//! use serde_json::json;
//!
//! let metrics = compute_indicator_metrics(&json!({
//!     "frequencyValue": 10,
//!     "frequencyUnit": "week",
//!     "personsBaseline": [{"hourlyRate": 50, "timeSpentMinutes": 60}],
//!     "personsPostChange": [{"hourlyRate": 50, "timeSpentMinutes": 15}]
//! }))
//! .unwrap();
//!
//! assert_eq!(metrics.hours_saved, 390.0);
//! assert_eq!(metrics.gross_savings, 19500.0);
//! ```

pub mod category;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod frequency;
pub mod gateway;
pub mod input;
pub mod io;
pub mod observability;
pub mod roi;

pub use crate::category::{get_category_calculator, CategoryCalculator, CategoryFields};

pub use crate::core::{
    CanonicalView, Error, IndicatorCategory, PersonTimeEntry, ProjectCosts, SchemaKind,
    ToolCostEntry,
};

pub use crate::frequency::{frequency_multiplier, FrequencyUnit};

pub use crate::gateway::{
    recalculate_indicator, InMemoryGateway, MetricsGateway, MetricsRecord, PersistOutcome,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::roi::{
    compute_indicator_metrics, compute_project_metrics, CalculationContext, IndicatorMetrics,
    IndicatorSummary, ProjectMetrics, RoiCalculator,
};
