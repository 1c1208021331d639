//! Request error types.

use reqwest::StatusCode;

/// Request errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport failure, invalid URL or undecodable body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The base URL is not absolute or cannot carry a path.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The remote answered with a non-success status.
    #[error("Unexpected response status {status}: {message}")]
    Status {
        /// Status returned by the remote.
        status: StatusCode,
        /// Response body, if it could be read.
        message: String,
    },
}
