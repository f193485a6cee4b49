use crate::category::get_category_calculator;
use crate::config::RoimapConfig;
use crate::core::types::IndicatorCategory;
use crate::core::Error;
use crate::io::{self, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

use super::{output_writer, resolve_format};

#[derive(Debug, Clone)]
pub struct CategoryConfig {
    pub category: String,
    pub baseline: PathBuf,
    pub post_change: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_category(config: CategoryConfig, settings: &RoimapConfig) -> Result<()> {
    let calculator = get_category_calculator(&config.category).ok_or_else(|| {
        let known: Vec<&str> = IndicatorCategory::ALL.iter().map(|c| c.as_str()).collect();
        Error::invalid_input(format!(
            "unknown category '{}' (expected one of: {})",
            config.category,
            known.join(", ")
        ))
    })?;

    let baseline = io::read_json(&config.baseline)?;
    let post_change = io::read_json(&config.post_change)?;
    let fields = calculator.calculate(&baseline, &post_change);

    let format = resolve_format(config.format, settings);
    let mut writer = output_writer(format, config.output.as_deref())?;
    writer.write_category(&fields)?;
    writer.flush()
}
