//! Failure taxonomy for the range data retrieval stage.

use thiserror::Error;

/// Classified failures from fetching and decoding the CIDR list.
///
/// Only [`FetchError::Connection`] is considered transient and retried;
/// every other class terminates the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to establish a connection to the endpoint.
    #[error("Connection error occurred: {0}")]
    Connection(String),

    /// Connect or read phase exceeded its timeout.
    #[error("Timeout error occurred: {0}")]
    Timeout(String),

    /// The endpoint answered with a non-2xx status code.
    #[error("HTTP error occurred: status {0}")]
    HttpStatus(u16),

    /// The body was not valid JSON, or the expected
    /// `data.resources.ipv4` path was absent.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Classify a transport-level error from the HTTP client.
    ///
    /// Timeouts are checked first so an expired connect timeout reports as
    /// `Timeout` rather than a retryable connection failure.
    pub fn from_transport(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}
