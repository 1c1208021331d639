//! Command-line interface definitions for spgcli.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SATySFi Playground command line client.
#[derive(Parser, Debug)]
#[command(name = "spgcli")]
#[command(about = "Submit SATySFi sources and inspect playground builds")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to S3_PUBLIC_ENDPOINT and API_ENDPOINT)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a source file for compilation and print its share link
    Submit {
        /// Source file, or `-` to read standard input
        #[arg(short, long)]
        file: PathBuf,

        /// Prefix prepended to the share path, e.g. https://playground.example
        #[arg(long, default_value = "")]
        share_base: String,
    },

    /// Print the artifacts of an existing build
    Resolve {
        /// Build identifier
        build_id: String,

        /// Print the artifacts as JSON
        #[arg(long)]
        json: bool,
    },
}
