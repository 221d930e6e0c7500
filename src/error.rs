use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid HTTP status code [{0}] given")]
    InvalidStatusCode(u16),

    #[error("Invalid HTTP header name of [{0}] given")]
    InvalidHeaderName(String),

    #[error("Unknown HTTP status name [{0}] given")]
    UnknownStatusName(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("HTTP conversion error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;
