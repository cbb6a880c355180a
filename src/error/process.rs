use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Load generator '{program}' exited with code {code}")]
    NonZeroExit { program: String, code: i32 },
    #[error("Load generator '{program}' was terminated by a signal")]
    Terminated { program: String },
}

pub type ProcessResult<T> = Result<T, ProcessError>;
