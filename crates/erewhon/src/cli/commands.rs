//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Erewhon - turn viewer comments into content revisions
#[derive(Parser, Debug)]
#[command(name = "erewhon")]
#[command(about = "Comment-driven content pipeline with an intent extractor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Path to a pipeline config TOML file
    #[arg(long, global = true, env = "EREWHON_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline against mock collaborators
    Run {
        /// Number of cycles to run (runs until Ctrl-C when omitted)
        #[arg(long)]
        cycles: Option<u64>,

        /// Disable simulated collaborator latency
        #[arg(long)]
        no_latency: bool,
    },

    /// Classify literal comment texts and print the results as JSON
    Classify {
        /// Comment texts to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },
}
