//! Configuration error types.

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required setting is not present.
    #[error("Configuration value '{0}' is missing")]
    MissingVariable(&'static str),

    /// Setting is present but not an http(s) endpoint.
    #[error("Configuration value '{name}' is not an http(s) endpoint: '{value}'")]
    InvalidEndpoint {
        /// Name of the offending setting.
        name: &'static str,
        /// Value that was rejected.
        value: String,
    },

    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// TOML deserialization failed.
    #[error(transparent)]
    Deserialization(#[from] toml::de::Error),
}
