//! Core data records for the Erewhon content pipeline.
//!
//! These are the plain shapes exchanged between the pipeline's collaborators:
//! trend sources produce [`TrendingTopic`]s, synthesizers produce [`Content`],
//! comment sources produce [`Comment`]s and the intent extractor turns those
//! into [`ProcessedComment`]s.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod comment;
mod content;
mod phase;
mod trend;

pub use category::Category;
pub use comment::{Comment, CommentBuilder, CommentBuilderError, ProcessedComment};
pub use content::{Content, ContentBuilder, ContentBuilderError};
pub use phase::PipelinePhase;
pub use trend::{TrendingTopic, TrendingTopicBuilder, TrendingTopicBuilderError};
