//! Error types for the share-page service.
//!
//! Every error is rendered as a JSON body; configuration problems and unknown
//! builds are both reported as "not found".

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::{debug, error};

/// Errors that can occur in the share-page service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] spg_config::error::Error),

    #[error(transparent)]
    Sdk(#[from] spg_sdk::error::Error),

    #[error("Share pages are disabled: configuration is unavailable")]
    ConfigUnavailable,

    #[error("Build '{0}' not found")]
    BuildNotFound(String),

    #[error("No route for {0}")]
    RouteNotFound(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            Error::ConfigUnavailable | Error::BuildNotFound(_) | Error::RouteNotFound(_) => {
                debug!("Answering not found: {}", self);
                (StatusCode::NOT_FOUND, "Not found")
            }
            Error::IO(_) | Error::Config(_) | Error::Sdk(_) => {
                error!("Creating API error response for error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
