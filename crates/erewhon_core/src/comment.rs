//! Comments and their classified form.

use crate::Category;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Raw human feedback left on a published content item.
///
/// Comments are immutable once received; fields are exposed through getters.
///
/// # Examples
///
/// ```
/// use erewhon_core::CommentBuilder;
///
/// let comment = CommentBuilder::default()
///     .id("c1")
///     .source_content_id("erewhon_video_1")
///     .author("User42")
///     .text("music should be louder")
///     .build()
///     .unwrap();
///
/// assert_eq!(comment.author(), "User42");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Getters,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_new::new,
)]
#[builder(setter(into))]
pub struct Comment {
    /// Comment identifier
    id: String,
    /// Published identifier of the content the comment was left on
    source_content_id: String,
    /// Author label
    author: String,
    /// Raw comment text
    text: String,
    /// When the comment was posted
    #[builder(default = "Utc::now()")]
    timestamp: DateTime<Utc>,
}

/// A comment enriched with a classification, confidence and prompt fragment.
///
/// Created once by the intent extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct ProcessedComment {
    /// The comment this was derived from
    comment: Comment,
    /// What the suggestion targets
    category: Category,
    /// Human-readable description of the suggestion
    intent_description: String,
    /// Short instruction to fold into the next generation prompt
    prompt_fragment: String,
    /// Confidence in [0, 1], fixed by the matching tier
    confidence: f64,
    /// When the comment was classified
    processed_at: DateTime<Utc>,
}
