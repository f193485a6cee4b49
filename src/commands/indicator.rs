use crate::config::RoimapConfig;
use crate::core::Error;
use crate::gateway::{build_record, recalculate_indicator, InMemoryGateway};
use crate::io::{self, OutputFormat};
use crate::roi::RoiCalculator;
use anyhow::Result;
use std::path::PathBuf;

use super::{output_writer, resolve_format};

#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub store: bool,
}

pub fn handle_indicator(config: IndicatorConfig, settings: &RoimapConfig) -> Result<()> {
    let record = io::read_json(&config.path)?;
    let calculator = RoiCalculator::with_context(settings.calculation_context());

    let computed = if config.store {
        let gateway = InMemoryGateway::new();
        let computed = recalculate_indicator(&calculator, &gateway, &record);
        tracing::info!(stored = gateway.len(), "persistence dry run finished");
        computed
    } else {
        build_record(&calculator, &record)
    }
    .ok_or_else(|| {
        Error::invalid_input(format!("{} contains a null indicator", config.path.display()))
    })?;
    tracing::debug!(path = %config.path.display(), "{}", computed.metrics.summary());

    let format = resolve_format(config.format, settings);
    let mut writer = output_writer(format, config.output.as_deref())?;
    writer.write_indicator(&computed)?;
    writer.flush()
}
