//! Error types for spgcli.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] spg_config::error::Error),

    #[error(transparent)]
    Sdk(#[from] spg_sdk::error::Error),
}
