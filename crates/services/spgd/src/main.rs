//! SATySFi Playground share-page service (spgd)
//!
//! Serves `GET /share/{build_id}`: the artifacts of one build, resolved from
//! the object store, together with the compile endpoint the page submits to.
//!
//! Configuration is read from `--config FILE` or from the environment
//! (`S3_PUBLIC_ENDPOINT`, `API_ENDPOINT`). Without a usable configuration the
//! service still starts and answers every share page as not found.

use clap::Parser;
use spg_config::PlaygroundConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::{AppState, setup_api},
    cli::Cli,
};

use crate::prelude::*;
mod api;
mod cli;
mod error;
mod prelude;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlaygroundConfig::from_file(path),
        None => PlaygroundConfig::from_env(),
    };
    let api_handle = setup_api(AppState::from_config(config), cli.address).await?;

    tokio::select! {
        result = api_handle => {
            tracing::error!("API server stopped: {:?}", result);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    Ok(())
}
