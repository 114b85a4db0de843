//! Generated content records.

use crate::TrendingTopic;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A generative prompt pair with optional asset references and publish id.
///
/// Revisions produced from comments carry the id of the content they were
/// derived from in `parent_id` and a log of the applied modifications.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Content {
    /// Content identifier
    id: String,
    /// Topic that inspired the content
    inspiration: TrendingTopic,
    /// Id of the content this revision was derived from
    #[builder(default)]
    #[serde(default)]
    parent_id: Option<String>,
    /// Prompt for the music generator
    music_prompt: String,
    /// Prompt for the video generator
    video_prompt: String,
    /// Generated music asset
    #[builder(default)]
    #[serde(default)]
    music_asset_url: Option<String>,
    /// Generated video asset
    #[builder(default)]
    #[serde(default)]
    video_asset_url: Option<String>,
    /// Identifier assigned by the publisher
    #[builder(default)]
    #[serde(default)]
    published_id: Option<String>,
    /// Log of modifications applied to produce this revision
    #[builder(default)]
    #[serde(default)]
    modifications: Vec<String>,
    /// When the content was created
    #[builder(default = "Utc::now()")]
    created_at: DateTime<Utc>,
}

impl Content {
    /// Returns this content stamped with the publisher's identifier.
    pub fn with_published_id(mut self, published_id: impl Into<String>) -> Self {
        self.published_id = Some(published_id.into());
        self
    }

    /// True when this content is a revision of earlier content.
    pub fn is_revision(&self) -> bool {
        self.parent_id.is_some()
    }
}
