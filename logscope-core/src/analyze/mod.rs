//! Log Aggregation Engine
//!
//! Reads newline-delimited JSON logs of one module and turns them into
//! per-bucket metrics.
//!
//! The data processing architecture is:
//!
//! log file
//! parse_record
//! LogRecord
//! TimeRange (drop out-of-range)
//! BucketKey
//! Accumulator (Latency | Availability)
//! BucketMap
//! finalize
//! Reading / ChartSeries
//!

mod bucket;
mod constants;
mod driver;
mod error;
mod finalize;
mod metric;
mod parse;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use bucket::{BucketKey, BucketMap, Granularity};
pub use constants::{INPUT_DATE_FORMAT, LOG_TIMESTAMP_FORMAT};
pub use driver::{Aggregation, Analyzer, MalformedPolicy, Query, aggregate};
pub use error::AnalyzeError;
pub use finalize::{ChartSeries, Reading, finalize};
pub use metric::{
    Accumulator, Availability, AvailabilityAggregate, Latency, LatencyAggregate, MetricKind,
};
pub use parse::parse_record;
pub use types::{Elapsed, LatencySample, LogRecord, ScanStats, Status, StatusSample};
pub use window::TimeRange;
