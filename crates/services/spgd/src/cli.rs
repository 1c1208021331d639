use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "spgd")]
#[command(about = "SATySFi Playground share-page service")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub address: SocketAddr,

    /// Configuration file (defaults to environment variables)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
