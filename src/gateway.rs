//! Persistence gateway contract for computed metrics.
//!
//! The engine never persists anything on its own. [`recalculate_indicator`]
//! is the trigger a caller runs after source rows change: it computes the
//! metrics, merges category fields, hands the record to the gateway exactly
//! once and returns what it computed, whatever the gateway reports.

use crate::category::CategoryFields;
use crate::input;
use crate::roi::{IndicatorMetrics, RoiCalculator};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Record handed to the gateway: indicator metrics plus category fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    #[serde(flatten)]
    pub metrics: IndicatorMetrics,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFields>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PersistOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

pub trait MetricsGateway: Send + Sync {
    fn persist(&self, indicator_id: &str, record: &MetricsRecord) -> PersistOutcome;
}

/// Gateway keeping the latest record per indicator in memory.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    records: Mutex<BTreeMap<String, MetricsRecord>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, indicator_id: &str) -> Option<MetricsRecord> {
        self.records.lock().get(indicator_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl MetricsGateway for InMemoryGateway {
    fn persist(&self, indicator_id: &str, record: &MetricsRecord) -> PersistOutcome {
        self.records
            .lock()
            .insert(indicator_id.to_string(), record.clone());
        PersistOutcome::ok()
    }
}

/// Metrics plus category fields for a raw record, without persisting.
pub fn build_record(calculator: &RoiCalculator, record: &Value) -> Option<MetricsRecord> {
    let metrics = calculator.compute_indicator_metrics(record)?;
    let category = input::indicator_category(record).and_then(|category| {
        input::category_payloads(record)
            .map(|(baseline, post)| category.calculator().calculate(baseline, post))
    });
    Some(MetricsRecord { metrics, category })
}

/// Compute, persist once, and return the computed record.
///
/// Returns `None` only for a `null` record. Records without an id are
/// computed but not persisted. Gateway failures are logged and never alter
/// the returned record.
pub fn recalculate_indicator(
    calculator: &RoiCalculator,
    gateway: &dyn MetricsGateway,
    record: &Value,
) -> Option<MetricsRecord> {
    let computed = build_record(calculator, record)?;

    let Some(indicator_id) = input::indicator_id(record) else {
        tracing::warn!("indicator record has no id; metrics computed but not persisted");
        return Some(computed);
    };

    let outcome = gateway.persist(&indicator_id, &computed);
    if !outcome.success {
        tracing::warn!(
            indicator_id = %indicator_id,
            error = outcome.error.as_deref().unwrap_or("unknown error"),
            "failed to persist calculated metrics"
        );
    }
    Some(computed)
}
