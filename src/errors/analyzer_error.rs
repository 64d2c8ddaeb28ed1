//! Custom error types for loading metrics and saving reports
//!
//! The scoring engine itself is total and never fails; errors only
//! arise at the file boundary around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Failed to read input file {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pool metrics from {path}: {source}")]
    InputParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode risk report: {source}")]
    ReportEncode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write risk report to {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
