use crate::category::CategoryFields;
use crate::gateway::MetricsRecord;
use crate::io::output::OutputWriter;
use crate::roi::ProjectMetrics;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_pretty<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_indicator(&mut self, record: &MetricsRecord) -> anyhow::Result<()> {
        self.write_pretty(record)
    }

    fn write_project(&mut self, project: &ProjectMetrics) -> anyhow::Result<()> {
        self.write_pretty(project)
    }

    fn write_category(&mut self, fields: &CategoryFields) -> anyhow::Result<()> {
        self.write_pretty(fields)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ProjectCosts;
    use crate::roi::compute_project_metrics;
    use serde_json::Value;

    #[test]
    fn test_empty_project_json() {
        let project = compute_project_metrics("p-1", &[], &ProjectCosts::new(1000.0, 0.0));
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_project(&project).unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["projectId"], "p-1");
        assert_eq!(value["totalIndicators"], 0);
        assert_eq!(value["roiOverall"], -100.0);
        assert_eq!(value["paybackAvgMonths"], "Infinity");
    }
}
