//! Default modification applier.

use crate::collaborators::ModificationApplier;
use async_trait::async_trait;
use erewhon_core::{Category, Content, ContentBuilder, ProcessedComment};
use erewhon_error::{ErewhonResult, GenerationError, GenerationErrorKind};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Named edit recorded against each applied suggestion.
///
/// The name is an annotation in the modification log; it does not change the
/// generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ModificationOperation {
    /// Recolor the scene
    #[strum(serialize = "color shift")]
    ColorShift,
    /// Add an element
    #[strum(serialize = "object add")]
    ObjectAdd,
    /// Restyle the scene
    #[strum(serialize = "style change")]
    StyleChange,
    /// Retime audio or video
    #[strum(serialize = "speed adjustment")]
    SpeedAdjustment,
}

impl ModificationOperation {
    /// The operation logged for a suggestion of `category`.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Visual => Self::ObjectAdd,
            Category::Style => Self::StyleChange,
            Category::Audio => Self::SpeedAdjustment,
            Category::Narrative | Category::General => Self::ColorShift,
        }
    }
}

/// Produces a revision by appending suggestions to the video prompt history.
#[derive(Debug, Clone)]
pub struct RevisionApplier {
    video_base_url: String,
    latency: Duration,
}

impl Default for RevisionApplier {
    fn default() -> Self {
        Self::new("https://mock-runway-api.com/videos")
    }
}

impl RevisionApplier {
    /// Creates an applier that places revised videos under `video_base_url`.
    pub fn new(video_base_url: impl Into<String>) -> Self {
        Self {
            video_base_url: video_base_url.into(),
            latency: Duration::ZERO,
        }
    }

    /// Sets the simulated processing time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Builds the modification log for `suggestions`.
    pub fn modification_log(suggestions: &[ProcessedComment]) -> Vec<String> {
        suggestions
            .iter()
            .map(|s| {
                format!(
                    "Applied {}: {}",
                    ModificationOperation::for_category(*s.category()),
                    s.prompt_fragment()
                )
            })
            .collect()
    }
}

#[async_trait]
impl ModificationApplier for RevisionApplier {
    #[instrument(skip(self, content, suggestions), fields(content_id = %content.id(), suggestions = suggestions.len()))]
    async fn apply(
        &self,
        content: &Content,
        suggestions: &[ProcessedComment],
    ) -> ErewhonResult<Content> {
        if suggestions.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::ModificationFailed {
                content_id: content.id().clone(),
                reason: "no suggestions to apply".to_string(),
            })
            .into());
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let id = uuid::Uuid::new_v4().to_string();
        let modifications = Self::modification_log(suggestions);
        for entry in &modifications {
            debug!(modification = %entry, "Recorded modification");
        }

        let revision = ContentBuilder::default()
            .id(id.clone())
            .inspiration(content.inspiration().clone())
            .parent_id(Some(content.id().clone()))
            .music_prompt(content.music_prompt().clone())
            .video_prompt(format!("{} modified", content.video_prompt()))
            .music_asset_url(content.music_asset_url().clone())
            .video_asset_url(Some(format!("{}/{}.mp4", self.video_base_url, id)))
            .modifications(modifications)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ModificationFailed {
                    content_id: content.id().clone(),
                    reason: e.to_string(),
                })
            })?;

        info!(
            original = %content.id(),
            revision = %revision.id(),
            "Content revision complete"
        );
        Ok(revision)
    }
}
