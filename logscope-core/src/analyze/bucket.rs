use crate::analyze::error::AnalyzeError;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Truncation precision used to group timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Granularity {
    Month,
    Day,
    Hour,
}

impl Granularity {
    /// `chrono` format producing the bucket key. Every format is a prefix of
    /// the next finer one, so keys sort chronologically as plain strings.
    pub fn format(self) -> &'static str {
        match self {
            Granularity::Month => "%Y-%m",
            Granularity::Day => "%Y-%m-%d",
            Granularity::Hour => "%Y-%m-%dT%H",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Day => "day",
            Granularity::Hour => "hour",
        }
    }
}

impl FromStr for Granularity {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Granularity::Month),
            "day" => Ok(Granularity::Day),
            "hour" => Ok(Granularity::Hour),
            other => Err(AnalyzeError::InvalidGranularity {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical group key (`2023-10`, `2023-10-07`, `2023-10-07T10`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BucketKey(String);

impl BucketKey {
    pub fn resolve(timestamp: NaiveDateTime, granularity: Granularity) -> Self {
        Self(timestamp.format(granularity.format()).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable form used in tables and chart legends.
    pub fn label(&self) -> String {
        self.0.replace('T', " ")
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BucketKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Per-bucket aggregates in first-encounter order.
pub type BucketMap<A> = IndexMap<BucketKey, A>;
