use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("No samples recorded for tag '{tag}'")]
    EmptySampleSet { tag: String },
    #[error("Quantile fraction {fraction} is outside [0, 1]")]
    FractionOutOfRange { fraction: f64 },
}

pub type StatsResult<T> = Result<T, StatsError>;
