use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to write load plan '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Load plan rate must be >= 1.")]
    ZeroRate,
    #[error("Load plan ramp duration must be > 0.")]
    ZeroDuration,
}

pub type PlanResult<T> = Result<T, PlanError>;
