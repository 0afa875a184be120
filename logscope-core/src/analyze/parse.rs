use crate::analyze::constants::{LOG_TIMESTAMP_FORMAT, MAX_FRACTION_DIGITS};
use crate::analyze::error::AnalyzeError;
use crate::analyze::types::{Elapsed, LogRecord, Status};
use chrono::NaiveDateTime;
use serde_json::Value;

/// Parses one log line into a [`LogRecord`].
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_record(line_no: usize, line: &str) -> Result<LogRecord, AnalyzeError> {
    let event: Value = serde_json::from_str(line)
        .map_err(|e| AnalyzeError::malformed(line_no, format!("invalid JSON: {e}")))?;

    if !event.is_object() {
        return Err(AnalyzeError::malformed(line_no, "expected a JSON object"));
    }

    let timestamp = event
        .get("timestamp")
        .ok_or_else(|| AnalyzeError::malformed(line_no, "missing 'timestamp' field"))?;

    let timestamp = timestamp
        .as_str()
        .and_then(parse_timestamp)
        .ok_or_else(|| {
            AnalyzeError::malformed(line_no, format!("unparsable timestamp {timestamp}"))
        })?;

    let time = event.get("time").map(|v| match v.as_f64() {
        Some(millis) => Elapsed::Millis(millis),
        None => Elapsed::Invalid(v.to_string()),
    });

    let status = event.get("status").map(parse_status);

    Ok(LogRecord {
        timestamp,
        time,
        status,
    })
}

/// `%.f` alone accepts a missing or nanosecond fraction; log lines carry
/// one to six digits.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let (_, fraction) = value.strip_suffix('Z')?.rsplit_once('.')?;
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    NaiveDateTime::parse_from_str(value, LOG_TIMESTAMP_FORMAT).ok()
}

fn parse_status(value: &Value) -> Status {
    if let Some(code) = value.as_i64() {
        return Status::Code(code);
    }

    // 200.0 is still 200
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Status::Code(f as i64),
        _ => Status::Unrecognized(value.to_string()),
    }
}
