//! Erewhon CLI binary.
//!
//! - `erewhon run` drives the pipeline against mock collaborators
//! - `erewhon classify` runs the intent extractor on literal comments

use clap::Parser;
use erewhon::{TelemetryConfig, init_tracing_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, classify_comments, run_pipeline};

    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_tracing_with_config(
        TelemetryConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    match cli.command {
        Commands::Run { cycles, no_latency } => {
            run_pipeline(cli.config.as_deref(), cycles, no_latency).await?;
        }
        Commands::Classify { texts } => {
            classify_comments(cli.config.as_deref(), &texts)?;
        }
    }

    Ok(())
}
