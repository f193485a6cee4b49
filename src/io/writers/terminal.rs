use crate::category::CategoryFields;
use crate::core::ratio;
use crate::gateway::MetricsRecord;
use crate::io::output::{category_rows, money, OutputWriter};
use crate::roi::{IndicatorMetrics, ProjectMetrics};
use colored::*;
use std::io::Write;

const RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(self.writer, "  {}", title.bold().cyan())?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn line(&mut self, label: &str, value: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.writer, "  {label:<28} {value}")?;
        Ok(())
    }

    fn print_metrics(&mut self, metrics: &IndicatorMetrics) -> anyhow::Result<()> {
        self.line(
            "Annual frequency",
            format!(
                "{:.1} -> {:.1}",
                metrics.annual_frequency_baseline, metrics.annual_frequency_post_change
            ),
        )?;
        self.line("Hours saved / year", format!("{:.1}", metrics.hours_saved))?;
        self.line("Total cost baseline", money(metrics.total_cost_baseline))?;
        self.line("Total cost post-change", money(metrics.total_cost_post_change))?;
        self.line("Gross savings", money(metrics.gross_savings).green())?;
        self.line("Net savings", signed(metrics.net_savings))?;
        writeln!(self.writer, "{RULE}")?;
        self.line("ROI", roi_label(metrics.roi_percent))?;
        self.line(
            "ROI (steady state)",
            format!("{}%", ratio::display(metrics.roi_steady_state, 1)),
        )?;
        self.line("Payback", payback_label(metrics.payback_months))?;
        self.line(
            "Productivity gain",
            format!("{:.1}%", metrics.productivity_gain_percent),
        )?;
        self.line("Capacity gain", format!("{:.1}%", metrics.capacity_gain_percent))?;
        self.line("Efficiency", format!("{:.1}%", metrics.efficiency_percent))?;
        Ok(())
    }

    fn print_category(&mut self, fields: &CategoryFields) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  {} {}",
            "Category:".bold(),
            fields.category().to_string().bold()
        )?;
        writeln!(self.writer, "{RULE}")?;
        for (label, value) in category_rows(fields) {
            self.line(&label, format!("{value:.2}"))?;
        }
        Ok(())
    }
}

fn signed(value: f64) -> ColoredString {
    if value < 0.0 {
        money(value).red()
    } else {
        money(value).green()
    }
}

fn roi_label(roi_percent: f64) -> ColoredString {
    let text = format!("{}%", ratio::display(roi_percent, 1));
    if roi_percent < 0.0 {
        text.red()
    } else if roi_percent < 100.0 {
        text.yellow()
    } else {
        text.green()
    }
}

fn payback_label(months: f64) -> ColoredString {
    if months.is_infinite() {
        "never".red()
    } else {
        format!("{months:.1} months").normal()
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_indicator(&mut self, record: &MetricsRecord) -> anyhow::Result<()> {
        self.header("INDICATOR ROI")?;
        self.print_metrics(&record.metrics)?;
        if let Some(fields) = &record.category {
            self.print_category(fields)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_project(&mut self, project: &ProjectMetrics) -> anyhow::Result<()> {
        self.header(&format!("PROJECT ROI: {}", project.project_id))?;
        self.line("Indicators", project.total_indicators)?;
        self.line("Gross savings / year", money(project.gross_savings_annual_total).green())?;
        self.line("Net savings / year", signed(project.net_savings_annual_total))?;
        self.line(
            "Hours saved / year",
            format!("{:.1}", project.hours_saved_annual_total),
        )?;
        self.line("Implementation cost", money(project.implementation_cost_total))?;
        self.line("Recurring cost / year", money(project.recurring_cost_annual_total))?;
        self.line("Investment (year 1)", money(project.investment_year1))?;
        writeln!(self.writer, "{RULE}")?;
        self.line("ROI", roi_label(project.roi_overall))?;
        self.line("Payback", payback_label(project.payback_avg_months))?;

        if !project.indicators.is_empty() {
            writeln!(self.writer)?;
            for summary in &project.indicators {
                writeln!(
                    self.writer,
                    "  • {} ({}) net {}",
                    summary.indicator_id.as_deref().unwrap_or("-").bold(),
                    summary
                        .category
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "uncategorized".to_string()),
                    signed(summary.metrics.net_savings),
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_category(&mut self, fields: &CategoryFields) -> anyhow::Result<()> {
        self.header("CATEGORY DELTA")?;
        self.print_category(fields)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
