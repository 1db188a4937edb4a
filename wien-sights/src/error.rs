//! Error types used by the crate.

use thiserror::Error;

/// Wien Sights error type.
#[derive(Debug, Error)]
pub enum SightsError {
    /// The request did not reach the server or the connection broke while reading the body.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status code.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// Requested url.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body is not a valid GeoJSON feature collection.
    #[error("failed to decode data: {0}")]
    Decoding(String),
}

impl From<reqwest::Error> for SightsError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}
