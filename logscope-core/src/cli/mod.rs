pub mod analyze;
pub mod chart;
mod constants;
pub mod hint;
pub mod modules;
pub mod render;

#[cfg(test)]
mod tests;

pub use analyze::{Action, AnalyzeArgs, MetricReport, build_report, run_analyze};
pub use chart::{ChartLabels, ChartSize, render_line_chart};
pub use hint::error_hint;
pub use modules::{ModulesArgs, run_modules};
