//! Pipeline orchestration for Erewhon.
//!
//! The [`Orchestrator`] drives a fixed cycle over five collaborators: a trend
//! source, a content synthesizer, a publisher, a comment source and a
//! modification applier. Comments are classified by the
//! [`IntentExtractor`](erewhon_intent::IntentExtractor) between the comment
//! and modification phases.
//!
//! # Example
//!
//! ```no_run
//! use erewhon_pipeline::{Orchestrator, PipelineConfig};
//!
//! # async fn example() {
//! let mut orchestrator = Orchestrator::with_mocks(PipelineConfig::immediate());
//! let summary = orchestrator.run(Some(3)).await;
//! println!("{} cycles completed", summary.completed());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod applier;
mod collaborators;
mod config;
pub mod mock;
mod orchestrator;

pub use applier::{ModificationOperation, RevisionApplier};
pub use collaborators::{
    Collaborators, CommentSource, ContentSynthesizer, ModificationApplier, Publisher, TrendSource,
};
pub use config::PipelineConfig;
pub use orchestrator::{CycleReport, Orchestrator, RunSummary, ShutdownHandle};
