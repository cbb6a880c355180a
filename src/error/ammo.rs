use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmmoError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: &'static str },
    #[error("Failed to serialize JSON body: {source}")]
    SerializeBody {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write ammo '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read ammo '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed record header in '{path}' at record {record}")]
    MalformedRecordHeader { path: PathBuf, record: u64 },
    #[error("Truncated record {record} in '{path}': declared {declared} bytes")]
    TruncatedRecord {
        path: PathBuf,
        record: u64,
        declared: usize,
    },
    #[error("Record {record} in '{path}' is missing its CRLF terminator")]
    MissingTerminator { path: PathBuf, record: u64 },
}

pub type AmmoResult<T> = Result<T, AmmoError>;
