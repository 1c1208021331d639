//! spgcli: submit SATySFi sources to the playground and inspect builds.

mod cli;
mod commands;
mod error;
mod navigator;
mod prelude;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_resolve, handle_submit, load_config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(ref e) = result {
        tracing::error!("Error: {}", e);
    }

    result
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Submit { file, share_base } => handle_submit(&config, &file, &share_base).await,
        Commands::Resolve { build_id, json } => handle_resolve(&config, &build_id, json).await,
    }
}
