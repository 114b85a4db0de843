//! Mock collaborators and test-data builders.
//!
//! Everything here exists to exercise the pipeline without external services.
//! The mocks draw on `rand`; nothing in this module is used by the intent
//! extractor itself, so its output stays deterministic.

mod comments;
mod content;
mod fixture;
mod publisher;
mod trends;

pub use comments::MockCommentSource;
pub use content::MockContentSynthesizer;
pub use fixture::CommentFixture;
pub use publisher::MockPublisher;
pub use trends::MockTrendSource;

use crate::applier::RevisionApplier;
use crate::collaborators::Collaborators;
use crate::config::PipelineConfig;
use std::sync::Arc;
use std::time::Duration;

impl Collaborators {
    /// Mock collaborators sized and timed by `config`.
    pub fn mock(config: &PipelineConfig) -> Self {
        let latency = |millis: u64| {
            if *config.simulate_latency() {
                Duration::from_millis(millis)
            } else {
                Duration::ZERO
            }
        };
        Self {
            trends: Arc::new(
                MockTrendSource::new(*config.topics_per_scan()).with_latency(latency(500)),
            ),
            synthesizer: Arc::new(MockContentSynthesizer::new().with_latency(latency(1000))),
            publisher: Arc::new(MockPublisher::new()),
            comments: Arc::new(MockCommentSource::new(*config.comments_per_fetch())),
            applier: Arc::new(RevisionApplier::default().with_latency(latency(1500))),
        }
    }
}
