//! Contracts for the external services the pipeline drives.
//!
//! Real deployments back these with trend APIs, generative models and a video
//! platform. The [`mock`](crate::mock) module provides stand-ins.

use async_trait::async_trait;
use erewhon_core::{Comment, Content, ProcessedComment, TrendingTopic};
use erewhon_error::ErewhonResult;
use std::sync::Arc;

/// Source of trending topics.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Detect currently trending topics.
    ///
    /// # Returns
    ///
    /// Topics sorted by relevance, highest first.
    ///
    /// # Errors
    ///
    /// Returns an acquisition error if the source is unavailable.
    async fn detect(&self) -> ErewhonResult<Vec<TrendingTopic>>;
}

/// Generates a prompt pair and assets from trending topics.
#[async_trait]
pub trait ContentSynthesizer: Send + Sync {
    /// Synthesize content from `topics`.
    ///
    /// The first topic is the primary inspiration; the rest are secondary.
    ///
    /// # Errors
    ///
    /// Returns a generation error if no topics are given or generation fails.
    async fn synthesize(&self, topics: &[TrendingTopic]) -> ErewhonResult<Content>;
}

/// Publishes content to the outside world.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish `content` and return the platform's identifier for it.
    ///
    /// # Errors
    ///
    /// Returns a publish error if the upload is rejected.
    async fn publish(&self, content: &Content) -> ErewhonResult<String>;
}

/// Retrieves comments left on published content.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch comments for the content published as `published_id`.
    ///
    /// # Errors
    ///
    /// Returns an acquisition error if the source is unavailable.
    async fn fetch(&self, published_id: &str) -> ErewhonResult<Vec<Comment>>;
}

/// Folds accepted suggestions into a new content revision.
#[async_trait]
pub trait ModificationApplier: Send + Sync {
    /// Produce a revision of `content` with a fresh id that references it.
    ///
    /// # Errors
    ///
    /// Returns a generation error if the revision cannot be produced.
    async fn apply(
        &self,
        content: &Content,
        suggestions: &[ProcessedComment],
    ) -> ErewhonResult<Content>;
}

/// The full set of collaborators an orchestrator drives.
#[derive(Clone)]
pub struct Collaborators {
    /// Trend source
    pub trends: Arc<dyn TrendSource>,
    /// Content synthesizer
    pub synthesizer: Arc<dyn ContentSynthesizer>,
    /// Publisher
    pub publisher: Arc<dyn Publisher>,
    /// Comment source
    pub comments: Arc<dyn CommentSource>,
    /// Modification applier
    pub applier: Arc<dyn ModificationApplier>,
}
