//! Trending topic records.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A subject of elevated public attention observed by a trend source.
///
/// # Examples
///
/// ```
/// use erewhon_core::TrendingTopicBuilder;
///
/// let topic = TrendingTopicBuilder::default()
///     .topic("Space exploration milestone")
///     .source("Reddit")
///     .relevance(0.9)
///     .build()
///     .unwrap();
///
/// assert_eq!(topic.source(), "Reddit");
/// assert!(topic.context().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TrendingTopic {
    /// Topic headline
    topic: String,
    /// Where the topic was observed (e.g. "Twitter")
    source: String,
    /// Relevance score in [0, 1]
    relevance: f64,
    /// When the topic was observed
    #[builder(default = "Utc::now()")]
    observed_at: DateTime<Utc>,
    /// Free-text explanation of why it is trending
    #[builder(default)]
    #[serde(default)]
    context: Option<String>,
}
