use std::path::Path;

use spg_config::PlaygroundConfig;
use spg_sdk::{ArtifactResolver, BuildId, SubmissionCoordinator};
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::{navigator::PrintNavigator, prelude::*};

/// Load the configuration from `path`, or from the environment without one.
pub fn load_config(path: Option<&Path>) -> Result<PlaygroundConfig> {
    let config = match path {
        Some(path) => PlaygroundConfig::from_file(path)?,
        None => PlaygroundConfig::from_env()?,
    };
    Ok(config)
}

/// Read the source text from `path`, or from standard input for `-`.
pub async fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        tokio::io::stdin().read_to_string(&mut source).await?;
        return Ok(source);
    }
    Ok(tokio::fs::read_to_string(path).await?)
}

pub async fn handle_submit(config: &PlaygroundConfig, file: &Path, share_base: &str) -> Result<()> {
    let source = read_source(file).await?;
    let coordinator = SubmissionCoordinator::new(config, PrintNavigator::new(share_base))?;

    match coordinator.submit(Some(&source)).await? {
        Some(submission) => {
            println!("{}", submission);
            println!("Stored at {}", submission.storage_url);
        }
        None => {
            info!("{} is empty, nothing submitted", file.display());
            println!("Nothing to submit");
        }
    }
    Ok(())
}

pub async fn handle_resolve(config: &PlaygroundConfig, build_id: &str, json: bool) -> Result<()> {
    let build_id: BuildId = build_id.parse()?;
    let resolver = ArtifactResolver::new(config)?;

    let artifacts = resolver.resolve(&build_id).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        println!("Build {}", build_id);
        println!("{}", artifacts);
    }
    Ok(())
}
