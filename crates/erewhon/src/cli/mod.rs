//! Command-line interface module.

mod classify;
mod commands;
mod run;

pub use classify::classify_comments;
pub use commands::{Cli, Commands};
pub use run::run_pipeline;

use erewhon::{ErewhonResult, PipelineConfig};
use std::path::Path;

/// Loads the pipeline config from `path`, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> ErewhonResult<PipelineConfig> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading pipeline config");
            PipelineConfig::from_file(path)
        }
        None => Ok(PipelineConfig::default()),
    }
}
