use crate::category::CategoryFields;
use crate::gateway::MetricsRecord;
use crate::roi::ProjectMetrics;
use clap::ValueEnum;
use serde_json::Value;
use std::io::Write;

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    /// Parse a format name as written in `.roimap.toml`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_indicator(&mut self, record: &MetricsRecord) -> anyhow::Result<()>;
    fn write_project(&mut self, project: &ProjectMetrics) -> anyhow::Result<()>;
    fn write_category(&mut self, fields: &CategoryFields) -> anyhow::Result<()>;

    /// Push buffered output to the destination, surfacing late write errors.
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

/// Label/value rows for the numeric fields of a category result, in
/// declaration order.
pub(crate) fn category_rows(fields: &CategoryFields) -> Vec<(String, f64)> {
    let Ok(Value::Object(map)) = serde_json::to_value(fields) else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(key, value)| value.as_f64().map(|number| (humanize(key), number)))
        .collect()
}

/// `deltaMonthly` -> `Delta monthly`.
pub(crate) fn humanize(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch.to_ascii_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}

pub(crate) fn money(value: f64) -> String {
    format!("{value:.2}")
}
