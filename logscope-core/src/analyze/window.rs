use crate::analyze::constants::INPUT_DATE_FORMAT;
use crate::analyze::error::AnalyzeError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Inclusive window of log timestamps selected by a pair of calendar dates.
///
/// `start` is the first instant of the start date and `end` is the last
/// microsecond of the end date. An inverted window is accepted and simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    pub fn from_dates(start: &str, end: &str) -> Result<Self, AnalyzeError> {
        let start = parse_date(start)?.and_time(NaiveTime::MIN);
        let end = parse_date(end)?
            .and_hms_micro_opt(23, 59, 59, 999_999)
            .ok_or_else(|| AnalyzeError::InvalidDateFormat {
                value: end.to_string(),
            })?;

        if end < start {
            tracing::warn!(%start, %end, "time range is inverted, no records will match");
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AnalyzeError> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        AnalyzeError::InvalidDateFormat {
            value: value.to_string(),
        }
    })
}
