use crate::analyze::{
    Accumulator, AnalyzeError, Analyzer, Availability, Granularity, Latency, MalformedPolicy,
    MetricKind, Query, Reading, ScanStats, TimeRange, finalize,
};
use crate::cli::chart::{ChartLabels, ChartSize};
use crate::cli::render::{render_graph, render_json, render_table};
use crate::conf::load_or_builtin;
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Module whose log file is analyzed (e.g. search-api)
    #[arg(long)]
    pub module: String,

    /// First day of the window, inclusive
    #[arg(long = "start_time", alias = "start-time", value_name = "YYYY-MM-DD")]
    pub start_time: String,

    /// Last day of the window, inclusive
    #[arg(long = "end_time", alias = "end-time", value_name = "YYYY-MM-DD")]
    pub end_time: String,

    /// Bucket size
    #[arg(long = "group_by", alias = "group-by", value_enum)]
    pub group_by: Granularity,

    #[arg(long, value_enum)]
    pub action: Action,

    /// Path to a module config file (TOML). Built-in modules are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip and count malformed log lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Print readings as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Availability,
    Latency,
    GraphAvailability,
    GraphLatency,
}

impl Action {
    pub fn metric(self) -> MetricKind {
        match self {
            Action::Availability | Action::GraphAvailability => MetricKind::Availability,
            Action::Latency | Action::GraphLatency => MetricKind::Latency,
        }
    }

    pub fn is_graph(self) -> bool {
        matches!(self, Action::GraphAvailability | Action::GraphLatency)
    }
}

/// Finalized output of one run.
#[derive(Debug, Serialize)]
pub struct MetricReport {
    pub module: String,
    pub metric: MetricKind,
    pub readings: Vec<Reading>,
    pub stats: ScanStats,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = load_or_builtin(args.config.as_deref()).map_err(AnalyzeError::from)?;
    let range = TimeRange::from_dates(&args.start_time, &args.end_time)?;
    let query = Query::new(range, args.group_by);

    let policy = if args.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };
    let analyzer = Analyzer::new(&config).with_policy(policy);

    let report = build_report(&analyzer, &args.module, &query, args.action.metric())?;

    if report.stats.malformed > 0 {
        tracing::warn!(skipped = report.stats.malformed, "malformed lines were skipped");
    }

    let color = !args.no_color && io::stdout().is_terminal();
    let output = if args.json {
        render_json(&report)?
    } else if args.action.is_graph() {
        render_graph(
            &report,
            &ChartLabels::for_metric(report.metric),
            ChartSize::default(),
            color,
        )
    } else {
        render_table(&report, color)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

pub fn build_report(
    analyzer: &Analyzer,
    module: &str,
    query: &Query,
    metric: MetricKind,
) -> Result<MetricReport, AnalyzeError> {
    let (readings, stats) = match metric {
        MetricKind::Latency => collect::<Latency>(analyzer, module, query)?,
        MetricKind::Availability => collect::<Availability>(analyzer, module, query)?,
    };

    Ok(MetricReport {
        module: module.to_string(),
        metric,
        readings,
        stats,
    })
}

fn collect<M: Accumulator>(
    analyzer: &Analyzer,
    module: &str,
    query: &Query,
) -> Result<(Vec<Reading>, ScanStats), AnalyzeError> {
    let aggregation = analyzer.run::<M>(module, query)?;
    let readings = finalize::<M>(&aggregation.buckets)?;
    Ok((readings, aggregation.stats))
}
