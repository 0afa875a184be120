//! Per-bucket metric accumulators.
//!
//! Each metric decides which records it is interested in (`sample`), how a
//! bucket is created from the first sample (`start`), how later samples are
//! folded in (`fold`) and how the raw aggregate becomes the reported value
//! (`finalize`).

use crate::analyze::error::AnalyzeError;
use crate::analyze::types::{Elapsed, LatencySample, LogRecord, StatusSample};
use serde::Serialize;

pub trait Accumulator {
    type Sample: Copy;
    type Aggregate;

    /// Extracts this metric's sample from a record, `None` when the record
    /// lacks the field the metric needs.
    ///
    /// Fails with `MalformedRecord` when the field is present but unusable.
    fn sample(line: usize, record: &LogRecord) -> Result<Option<Self::Sample>, AnalyzeError>;

    /// Builds the aggregate for a bucket's first sample.
    fn start(sample: Self::Sample) -> Self::Aggregate;

    fn fold(aggregate: &mut Self::Aggregate, sample: Self::Sample);

    fn finalize(bucket: &str, aggregate: &Self::Aggregate) -> Result<f64, AnalyzeError>;
}

//-----------------------------------------------------------------------------
// Latency
//-----------------------------------------------------------------------------

pub struct Latency;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyAggregate {
    pub count: u64,
    pub total_time: f64,
}

impl Accumulator for Latency {
    type Sample = LatencySample;
    type Aggregate = LatencyAggregate;

    fn sample(line: usize, record: &LogRecord) -> Result<Option<LatencySample>, AnalyzeError> {
        match &record.time {
            None => Ok(None),
            Some(Elapsed::Millis(millis)) => Ok(Some(LatencySample { millis: *millis })),
            Some(Elapsed::Invalid(raw)) => Err(AnalyzeError::malformed(
                line,
                format!("'time' is not a number: {raw}"),
            )),
        }
    }

    fn start(sample: LatencySample) -> LatencyAggregate {
        LatencyAggregate {
            count: 1,
            total_time: sample.millis,
        }
    }

    fn fold(aggregate: &mut LatencyAggregate, sample: LatencySample) {
        aggregate.count += 1;
        aggregate.total_time += sample.millis;
    }

    fn finalize(bucket: &str, aggregate: &LatencyAggregate) -> Result<f64, AnalyzeError> {
        if aggregate.count == 0 {
            return Err(AnalyzeError::DivisionByZero {
                bucket: bucket.to_string(),
            });
        }
        Ok(aggregate.total_time / aggregate.count as f64)
    }
}

//-----------------------------------------------------------------------------
// Availability
//-----------------------------------------------------------------------------

pub struct Availability;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityAggregate {
    pub success: u64,
    pub error: u64,
}

impl AvailabilityAggregate {
    pub fn total(&self) -> u64 {
        self.success + self.error
    }
}

impl Accumulator for Availability {
    type Sample = StatusSample;
    type Aggregate = AvailabilityAggregate;

    fn sample(_line: usize, record: &LogRecord) -> Result<Option<StatusSample>, AnalyzeError> {
        Ok(record.status.as_ref().map(|status| StatusSample {
            success: status.is_success(),
        }))
    }

    fn start(sample: StatusSample) -> AvailabilityAggregate {
        let mut aggregate = AvailabilityAggregate::default();
        Self::fold(&mut aggregate, sample);
        aggregate
    }

    fn fold(aggregate: &mut AvailabilityAggregate, sample: StatusSample) {
        if sample.success {
            aggregate.success += 1;
        } else {
            aggregate.error += 1;
        }
    }

    /// Error percentage of the bucket.
    fn finalize(bucket: &str, aggregate: &AvailabilityAggregate) -> Result<f64, AnalyzeError> {
        let total = aggregate.total();
        if total == 0 {
            return Err(AnalyzeError::DivisionByZero {
                bucket: bucket.to_string(),
            });
        }
        Ok(aggregate.error as f64 / total as f64 * 100.0)
    }
}

//-----------------------------------------------------------------------------
// Runtime selection
//-----------------------------------------------------------------------------

/// Metric picked by the caller for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Latency,
    Availability,
}

impl MetricKind {
    pub fn title(self) -> &'static str {
        match self {
            MetricKind::Latency => "Latency",
            MetricKind::Availability => "Availability",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            MetricKind::Latency => "Latency (ms)",
            MetricKind::Availability => "Availability (%)",
        }
    }

    /// Suffix appended to values in the text table.
    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Latency => " ms",
            MetricKind::Availability => "%",
        }
    }
}
