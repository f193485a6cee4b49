use crate::config::RoimapConfig;
use crate::core::Error;
use crate::input;
use crate::io::{self, OutputFormat};
use crate::roi::RoiCalculator;
use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;

use super::{output_writer, resolve_format};

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Document shaped `{ "project": {...}, "indicators": [...] }`
    pub path: PathBuf,
    /// Overrides `project.id` from the document
    pub project_id: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_project(config: ProjectConfig, settings: &RoimapConfig) -> Result<()> {
    let document = io::read_json(&config.path)?;
    let project = document.get("project").unwrap_or(&Value::Null);
    let indicators = document
        .get("indicators")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::invalid_input("project document has no \"indicators\" array"))?;

    let project_id = config
        .project_id
        .clone()
        .or_else(|| input::indicator_id(project))
        .ok_or_else(|| {
            Error::invalid_input("no project id: pass --project-id or set project.id")
        })?;

    let calculator = RoiCalculator::with_context(settings.calculation_context());
    let metrics =
        calculator.compute_project_metrics(&project_id, indicators, &input::project_costs(project));

    if metrics.total_indicators == 0 && !indicators.is_empty() {
        tracing::warn!(
            project_id = %project_id,
            "no indicator in the document belongs to this project"
        );
    }

    let format = resolve_format(config.format, settings);
    let mut writer = output_writer(format, config.output.as_deref())?;
    writer.write_project(&metrics)?;
    writer.flush()
}
