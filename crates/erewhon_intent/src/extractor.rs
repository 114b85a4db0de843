//! Comment-to-intent extraction.

use crate::blocklist::is_blocked;
use crate::config::ExtractorConfig;
use crate::patterns::{general_fragment, match_category, tier_confidence};
use crate::taxonomy::harvest_terms;
use chrono::{DateTime, Utc};
use erewhon_core::{Category, Comment, ProcessedComment};
use erewhon_error::{ClassificationError, ClassificationErrorKind, ErewhonResult};
use tracing::{debug, info, instrument, warn};

/// Pattern categories tried in priority order; the first to match wins.
const PRIORITY: &[Category] = &[Category::Visual, Category::Style, Category::Audio];

/// Classifies comments into modification directives.
///
/// The extractor is stateless across calls: it only reads its config and the
/// static pattern and keyword tables, so it can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct IntentExtractor {
    config: ExtractorConfig,
}

impl IntentExtractor {
    /// Creates an extractor with the given config.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active config.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn priority(&self) -> impl Iterator<Item = Category> + '_ {
        PRIORITY.iter().copied().chain(
            self.config
                .narrative_enabled()
                .then_some(Category::Narrative),
        )
    }

    /// Classifies a batch at the current time.
    ///
    /// See [`extract_at`](Self::extract_at).
    pub fn extract(&self, comments: &[Comment]) -> Vec<ProcessedComment> {
        self.extract_at(comments, Utc::now())
    }

    /// Classifies a batch, stamping results with `now`.
    ///
    /// Results scoring at or below the confidence floor are dropped. The rest
    /// are sorted by confidence descending, then by comment timestamp
    /// descending. Malformed comments are logged and skipped.
    #[instrument(skip(self, comments), fields(count = comments.len()))]
    pub fn extract_at(&self, comments: &[Comment], now: DateTime<Utc>) -> Vec<ProcessedComment> {
        let floor = *self.config.confidence_floor();
        let mut processed = Vec::new();

        for comment in comments {
            match self.classify_at(comment, now) {
                Ok(Some(result)) if *result.confidence() > floor => processed.push(result),
                Ok(Some(result)) => {
                    debug!(
                        comment_id = %comment.id(),
                        confidence = result.confidence(),
                        "Suggestion below confidence floor"
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(comment_id = %comment.id(), error = %e, "Skipping malformed comment");
                }
            }
        }

        processed.sort_by(|a, b| {
            b.confidence()
                .total_cmp(a.confidence())
                .then_with(|| b.comment().timestamp().cmp(a.comment().timestamp()))
        });

        info!(
            suggestions = processed.len(),
            "Creative suggestions extracted"
        );
        for result in processed.iter().take(3) {
            let preview: String = result.comment().text().chars().take(50).collect();
            info!(
                comment = %preview,
                intent = %result.intent_description(),
                "Top suggestion"
            );
        }

        processed
    }

    /// Classifies a single comment without applying the confidence floor.
    ///
    /// Returns `Ok(None)` for blocklisted comments and for comments that match
    /// neither a pattern nor a taxonomy term.
    ///
    /// # Errors
    ///
    /// Returns a classification error if the comment has no text.
    pub fn classify(&self, comment: &Comment) -> ErewhonResult<Option<ProcessedComment>> {
        self.classify_at(comment, Utc::now())
    }

    fn classify_at(
        &self,
        comment: &Comment,
        now: DateTime<Utc>,
    ) -> ErewhonResult<Option<ProcessedComment>> {
        if comment.text().trim().is_empty() {
            return Err(ClassificationError::new(ClassificationErrorKind::MissingText(
                comment.id().clone(),
            ))
            .into());
        }

        let lowered = comment.text().to_lowercase();
        if is_blocked(&lowered) {
            debug!(comment_id = %comment.id(), "Comment vetoed by blocklist");
            return Ok(None);
        }

        let matched = self
            .priority()
            .find_map(|category| match_category(category, &lowered));

        if let Some(m) = matched {
            let confidence = tier_confidence(m.category).unwrap_or_default();
            return Ok(Some(ProcessedComment::new(
                comment.clone(),
                m.category,
                m.intent_description(),
                m.prompt_fragment(&lowered, *self.config.max_visual_terms()),
                confidence,
                now,
            )));
        }

        let terms = harvest_terms(&lowered);
        if terms.is_empty() {
            return Ok(None);
        }

        let shown: Vec<&str> = terms.iter().take(3).copied().collect();
        Ok(Some(ProcessedComment::new(
            comment.clone(),
            Category::General,
            format!("General enhancement: {}", shown.join(", ")),
            general_fragment(&terms),
            *self.config.general_confidence(),
            now,
        )))
    }
}
