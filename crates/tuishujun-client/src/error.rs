use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single book lookup. Users only ever see a generic message; the variants are for logs.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request deadline (10s by default) elapsed.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("catalog API returned {0}")]
    Status(StatusCode),

    /// Body is not JSON or does not match the book schema.
    #[error("failed to decode book: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Timeouts count as network failures.
    pub fn is_network(&self) -> bool {
        matches!(self, LookupError::Network(_) | LookupError::Timeout(_))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout(e)
        } else {
            LookupError::Network(e)
        }
    }
}
