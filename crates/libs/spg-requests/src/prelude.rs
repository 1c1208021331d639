//! Common types and utilities.

/// Request error type.
pub use crate::error::Error;

/// Request result type.
pub type Result<T> = core::result::Result<T, Error>;
