use crate::analyze::ChartSeries;
use crate::cli::analyze::MetricReport;
use crate::cli::chart::{ChartLabels, ChartSize, render_line_chart};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// One line per bucket, in the order buckets were first seen in the log.
pub fn render_table(report: &MetricReport, color: bool) -> String {
    let mut out = String::new();
    let unit = report.metric.unit();

    for reading in &report.readings {
        let label = reading.bucket.label();
        let value = format!("{}{unit}", format_value(reading.value));

        if color {
            let _ = writeln!(out, "{}: {}", label.cyan(), value.bold());
        } else {
            let _ = writeln!(out, "{label}: {value}");
        }
    }

    out
}

/// Legend followed by the ASCII chart, buckets in chronological order.
pub fn render_graph(
    report: &MetricReport,
    labels: &ChartLabels,
    size: ChartSize,
    color: bool,
) -> String {
    let series = ChartSeries::from_readings(report.readings.clone());
    let mut out = String::new();

    out.push_str("Legend:\n");
    for (index, label) in series.legend() {
        if color {
            let _ = writeln!(out, "- [{}]: {}", index.yellow(), label);
        } else {
            let _ = writeln!(out, "- [{index}]: {label}");
        }
    }

    out.push('\n');
    out.push_str(&render_line_chart(&series, labels, size));
    out
}

pub fn render_json(report: &MetricReport) -> anyhow::Result<String> {
    let mut s = serde_json::to_string_pretty(report)?;
    s.push('\n');
    Ok(s)
}

/// Whole numbers keep one decimal (`200.0`), everything else prints in full.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
