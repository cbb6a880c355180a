use thiserror::Error;

use super::{
    AmmoError, ConfigError, PlanError, ProbeError, ProcessError, ReportError, ResultsError,
    StatsError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Ammo error: {0}")]
    Ammo(#[from] AmmoError),
    #[error("Load plan error: {0}")]
    Plan(#[from] PlanError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Result log error: {0}")]
    Results(#[from] ResultsError),
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),
    #[error("Load generator error: {0}")]
    Process(#[from] ProcessError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn ammo<E>(error: E) -> Self
    where
        E: Into<AmmoError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn results<E>(error: E) -> Self
    where
        E: Into<ResultsError>,
    {
        error.into().into()
    }

    pub fn process<E>(error: E) -> Self
    where
        E: Into<ProcessError>,
    {
        error.into().into()
    }
}
