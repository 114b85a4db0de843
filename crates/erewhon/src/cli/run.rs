//! Pipeline run command handler.

use super::load_config;
use erewhon::{ErewhonResult, Orchestrator};
use std::path::Path;
use tracing::{info, warn};

/// Runs the mock pipeline for `cycles` cycles, or until Ctrl-C.
pub async fn run_pipeline(
    config_path: Option<&Path>,
    cycles: Option<u64>,
    no_latency: bool,
) -> ErewhonResult<()> {
    let mut config = load_config(config_path)?;
    if no_latency {
        config = config.with_simulated_latency(false);
    }

    let mut orchestrator = Orchestrator::with_mocks(config);
    let shutdown = orchestrator.shutdown_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, stopping after the current cycle");
                shutdown.shutdown();
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    let summary = orchestrator.run(cycles).await;
    println!(
        "Completed {} cycle(s), {} failed, {} item(s) published",
        summary.completed(),
        summary.failed(),
        orchestrator.history().len()
    );
    Ok(())
}
