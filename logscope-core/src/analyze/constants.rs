/// Format of the `--start_time` / `--end_time` inputs.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the `timestamp` field in every log line.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Sub-second digits allowed in a log timestamp (microseconds).
pub const MAX_FRACTION_DIGITS: usize = 6;

pub const SUCCESS_STATUS: i64 = 200;
