use crate::category::CategoryFields;
use crate::core::ratio;
use crate::gateway::MetricsRecord;
use crate::io::output::{category_rows, money, OutputWriter};
use crate::roi::{IndicatorMetrics, ProjectMetrics};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_table_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        Ok(())
    }

    fn write_metrics_table(&mut self, metrics: &IndicatorMetrics) -> anyhow::Result<()> {
        self.write_table_header()?;
        self.write_row(
            "Annual frequency (baseline / post-change)",
            &format!(
                "{:.1} / {:.1}",
                metrics.annual_frequency_baseline, metrics.annual_frequency_post_change
            ),
        )?;
        self.write_row("Hours saved per year", &format!("{:.1}", metrics.hours_saved))?;
        self.write_row("Total cost baseline", &money(metrics.total_cost_baseline))?;
        self.write_row("Total cost post-change", &money(metrics.total_cost_post_change))?;
        self.write_row("Gross savings", &money(metrics.gross_savings))?;
        self.write_row("Net savings", &money(metrics.net_savings))?;
        self.write_row("Investment (year 1)", &money(metrics.investment_year1))?;
        self.write_row("ROI", &format!("{}%", ratio::display(metrics.roi_percent, 1)))?;
        self.write_row(
            "ROI (steady state)",
            &format!("{}%", ratio::display(metrics.roi_steady_state, 1)),
        )?;
        self.write_row(
            "Payback",
            &format!("{} months", ratio::display(metrics.payback_months, 1)),
        )?;
        self.write_row(
            "Productivity gain",
            &format!("{:.1}%", metrics.productivity_gain_percent),
        )?;
        self.write_row(
            "Capacity gain",
            &format!("{:.1}%", metrics.capacity_gain_percent),
        )?;
        self.write_row("Efficiency", &format!("{:.1}%", metrics.efficiency_percent))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_category_table(&mut self, fields: &CategoryFields) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", fields.category())?;
        writeln!(self.writer)?;
        self.write_table_header()?;
        for (label, value) in category_rows(fields) {
            self.write_row(&label, &format!("{value:.2}"))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_indicator(&mut self, record: &MetricsRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "# Indicator ROI Report")?;
        writeln!(self.writer)?;
        self.write_metrics_table(&record.metrics)?;
        if let Some(fields) = &record.category {
            self.write_category_table(fields)?;
        }
        Ok(())
    }

    fn write_project(&mut self, project: &ProjectMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "# Project ROI Report: {}", project.project_id)?;
        writeln!(self.writer)?;
        self.write_table_header()?;
        self.write_row("Indicators", &project.total_indicators.to_string())?;
        self.write_row("Gross savings per year", &money(project.gross_savings_annual_total))?;
        self.write_row("Net savings per year", &money(project.net_savings_annual_total))?;
        self.write_row(
            "Hours saved per year",
            &format!("{:.1}", project.hours_saved_annual_total),
        )?;
        self.write_row("Implementation cost", &money(project.implementation_cost_total))?;
        self.write_row("Recurring cost per year", &money(project.recurring_cost_annual_total))?;
        self.write_row("Investment (year 1)", &money(project.investment_year1))?;
        self.write_row("ROI", &format!("{}%", ratio::display(project.roi_overall, 1)))?;
        self.write_row(
            "Payback",
            &format!("{} months", ratio::display(project.payback_avg_months, 1)),
        )?;
        writeln!(self.writer)?;

        if !project.indicators.is_empty() {
            writeln!(self.writer, "## Indicators")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Indicator | Category | Net savings | ROI |")?;
            writeln!(self.writer, "|-----------|----------|-------------|-----|")?;
            for summary in &project.indicators {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {}% |",
                    summary.indicator_id.as_deref().unwrap_or("-"),
                    summary
                        .category
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    money(summary.metrics.net_savings),
                    ratio::display(summary.metrics.roi_percent, 1),
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_category(&mut self, fields: &CategoryFields) -> anyhow::Result<()> {
        self.write_category_table(fields)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
