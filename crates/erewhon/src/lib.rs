//! Erewhon - comment-driven content revision
//!
//! Erewhon runs a fixed content cycle: detect trending topics, synthesize a
//! music and video prompt pair, publish, collect viewer comments, turn those
//! comments into modification directives and publish a revised version.
//!
//! The heart of the system is the intent extractor, which classifies free-text
//! suggestions ("would be cooler if the robot was wearing a cape") into a
//! category, a prompt fragment and a confidence score.
//!
//! # Quick Start
//!
//! ```
//! use erewhon::{Category, CommentBuilder, IntentExtractor};
//!
//! let comment = CommentBuilder::default()
//!     .id("c1")
//!     .source_content_id("erewhon_video_1")
//!     .author("User42")
//!     .text("music should be louder")
//!     .build()
//!     .unwrap();
//!
//! let processed = IntentExtractor::default().extract(&[comment]);
//! assert_eq!(*processed[0].category(), Category::Audio);
//! ```
//!
//! # Architecture
//!
//! - `erewhon_error` - Error types
//! - `erewhon_core` - Data records (comments, topics, content, phases)
//! - `erewhon_intent` - Intent extractor
//! - `erewhon_pipeline` - Collaborator traits, mocks and the orchestrator
//!
//! This crate re-exports everything for convenience.

pub use erewhon_core::*;
pub use erewhon_error::*;
pub use erewhon_intent::*;
pub use erewhon_pipeline::{
    Collaborators, CommentSource, ContentSynthesizer, CycleReport, ModificationApplier,
    ModificationOperation, Orchestrator, PipelineConfig, Publisher, RevisionApplier, RunSummary,
    ShutdownHandle, TrendSource, mock,
};

mod classify;
mod telemetry;

pub use classify::{classify_texts, literal_comments};
pub use telemetry::{TelemetryConfig, init_tracing, init_tracing_with_config};
