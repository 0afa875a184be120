use crate::analyze::bucket::{BucketKey, BucketMap};
use crate::analyze::error::AnalyzeError;
use crate::analyze::metric::Accumulator;
use serde::Serialize;

/// Reported value for one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub bucket: BucketKey,
    pub value: f64,
}

/// Finalizes every bucket, keeping the map's first-encounter order.
pub fn finalize<M: Accumulator>(
    buckets: &BucketMap<M::Aggregate>,
) -> Result<Vec<Reading>, AnalyzeError> {
    buckets
        .iter()
        .map(|(key, aggregate)| {
            Ok(Reading {
                bucket: key.clone(),
                value: M::finalize(key.as_str(), aggregate)?,
            })
        })
        .collect()
}

/// Chronologically ordered readings with a dense x index, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    points: Vec<(usize, f64)>,
    keys: Vec<BucketKey>,
}

impl ChartSeries {
    pub fn from_readings(mut readings: Vec<Reading>) -> Self {
        readings.sort_by(|a, b| a.bucket.cmp(&b.bucket));

        let (keys, points) = readings
            .into_iter()
            .enumerate()
            .map(|(i, r)| (r.bucket, (i, r.value)))
            .unzip();

        Self { points, keys }
    }

    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(index, label)` pairs, labels with `T` replaced by a space.
    pub fn legend(&self) -> Vec<(usize, String)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| (i, key.label()))
            .collect()
    }
}
