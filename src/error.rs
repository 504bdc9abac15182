//! Crate error type.
//!
//! The client does not interpret failures. Each variant wraps the underlying
//! error transparently so callers see the transport's own message.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network failure, non-2xx status, or an unreadable body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body is valid JSON but does not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of the failed response, when the transport got that far.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
