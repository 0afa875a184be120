use crate::analyze::constants::SUCCESS_STATUS;
use chrono::NaiveDateTime;

/// One parsed log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub time: Option<Elapsed>,
    pub status: Option<Status>,
}

/// `time` field, request latency in milliseconds.
///
/// Only the latency metric reads it, so a bad value is kept as-is and
/// rejected there instead of failing every metric.
#[derive(Debug, Clone, PartialEq)]
pub enum Elapsed {
    Millis(f64),
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Code(i64),
    /// A `status` field that is not an integer; kept so it still counts as an error.
    Unrecognized(String),
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Code(SUCCESS_STATUS))
    }
}

/// Sample fed to the latency accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySample {
    pub millis: f64,
}

/// Sample fed to the availability accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSample {
    pub success: bool,
}

/// Counters describing one pass over a log source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanStats {
    pub lines: u64,
    pub blank: u64,
    pub records: u64,
    pub matched: u64,
    pub out_of_range: u64,
    pub ineligible: u64,
    pub malformed: u64,
}
