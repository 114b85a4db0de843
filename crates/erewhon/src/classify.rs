//! One-shot classification of literal comment text.

use chrono::Utc;
use erewhon_core::{Comment, ProcessedComment};
use erewhon_intent::IntentExtractor;

/// Wraps literal texts as comments with ids `cli_<i>`, timestamped now.
pub fn literal_comments<S: AsRef<str>>(texts: &[S]) -> Vec<Comment> {
    let now = Utc::now();
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            Comment::new(
                format!("cli_{}", i),
                "cli".to_string(),
                "cli".to_string(),
                text.as_ref().to_string(),
                now,
            )
        })
        .collect()
}

/// Runs `extractor` over literal texts.
///
/// Returns the accepted suggestions in extractor order.
pub fn classify_texts<S: AsRef<str>>(
    extractor: &IntentExtractor,
    texts: &[S],
) -> Vec<ProcessedComment> {
    extractor.extract(&literal_comments(texts))
}
