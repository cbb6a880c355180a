use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
    #[error("Invalid probe URL: {source}")]
    Url {
        #[from]
        source: url::ParseError,
    },
    #[error("Unexpected status {status} from {context}")]
    UnexpectedStatus { context: &'static str, status: u16 },
    #[error("Ping returned an empty body")]
    EmptyBody,
    #[error("Shorten response has no usable 'ShortUrl' field")]
    MissingShortUrl,
    #[error("Redirect response has no 'Location' header")]
    MissingLocation,
    #[error("Redirect Location '{actual}' does not match submitted '{expected}'")]
    LocationMismatch { expected: String, actual: String },
}

pub type ProbeResult<T> = Result<T, ProbeError>;
