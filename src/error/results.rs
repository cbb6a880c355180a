use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("No result log found under '{root}'")]
    MissingLog { root: PathBuf },
    #[error("Found {count} result logs under '{root}'; expected exactly one")]
    AmbiguousLog { root: PathBuf, count: usize },
    #[error("Failed to scan '{root}' for result logs: {source}")]
    Scan {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read result log '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed result line {line}: expected at least 6 tab-separated fields, found {found}")]
    MissingFields { line: u64, found: usize },
    #[error("Malformed result line {line}: invalid latency '{value}': {source}")]
    InvalidLatency {
        line: u64,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

pub type ResultsResult<T> = Result<T, ResultsError>;
