use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Initialize the logging system with environment-based filtering
///
/// Results go to stdout, so diagnostics are always written to stderr:
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - `LogFormat::Json` flattens event fields for machine consumption
/// - `LogFormat::Pretty` uses the compact human readable formatter
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.compact().without_time().init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}
