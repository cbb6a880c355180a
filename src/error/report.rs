use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write report '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;
