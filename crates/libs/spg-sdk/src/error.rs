//! SDK error types.

/// SDK errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A build identifier was constructed from an empty string.
    #[error("Build identifier must not be empty")]
    EmptyBuildId,

    /// The compile endpoint answered with a locator that names no build.
    #[error("Compile endpoint returned a locator without build identifier: '{0}'")]
    MalformedLocator(String),

    /// `submit` was called while another submission was still running.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Request to the compile endpoint failed.
    #[error(transparent)]
    Request(#[from] spg_requests::error::Error),
}
