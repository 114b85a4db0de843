use chrono::{DateTime, TimeZone, Utc};
use erewhon_core::Comment;

/// Deterministic comment builder for tests.
///
/// # Examples
///
/// ```
/// use erewhon_pipeline::mock::CommentFixture;
///
/// let comment = CommentFixture::new("add a hat").id("c9").build();
/// assert_eq!(comment.id(), "c9");
/// assert_eq!(comment.source_content_id(), "erewhon_video_1");
/// ```
#[derive(Debug, Clone)]
pub struct CommentFixture {
    id: String,
    source_content_id: String,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl CommentFixture {
    /// Starts a fixture with `text` and fixed defaults for everything else.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: "fixture_comment".to_string(),
            source_content_id: "erewhon_video_1".to_string(),
            author: "FixtureUser".to_string(),
            text: text.into(),
            timestamp: Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }

    /// Sets the comment id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the published id the comment was left on.
    pub fn on(mut self, source_content_id: impl Into<String>) -> Self {
        self.source_content_id = source_content_id.into();
        self
    }

    /// Sets the author label.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds the comment.
    pub fn build(self) -> Comment {
        Comment::new(
            self.id,
            self.source_content_id,
            self.author,
            self.text,
            self.timestamp,
        )
    }
}
