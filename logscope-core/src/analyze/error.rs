use crate::conf::ConfigError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AnalyzeError {
    //-------------------------------------------------------------------------
    // Query validation
    //-------------------------------------------------------------------------
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    #[diagnostic(help("dates are calendar days such as 2023-10-07"))]
    InvalidDateFormat { value: String },

    #[error("invalid granularity '{value}'")]
    #[diagnostic(help("supported granularities are: month, day, hour"))]
    InvalidGranularity { value: String },

    //-------------------------------------------------------------------------
    // Source lookup
    //-------------------------------------------------------------------------
    #[error("unknown module '{module}'")]
    ModuleNotFound { module: String },

    #[error("no log file found for module '{module}' (pattern '{pattern}')")]
    SourceUnavailable { module: String, pattern: String },

    #[error("failed to read log file {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Scanning / finalization
    //-------------------------------------------------------------------------
    #[error("failed to read line {line}: {source}")]
    ReadLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("bucket '{bucket}' has no samples")]
    DivisionByZero { bucket: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl AnalyzeError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn read_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadSource {
            path: path.into(),
            source,
        }
    }
}
