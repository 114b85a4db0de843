//! Classify command handler.

use super::load_config;
use erewhon::{IntentExtractor, classify_texts};
use std::path::Path;

/// Classifies `texts` and prints the accepted suggestions as JSON.
pub fn classify_comments(
    config_path: Option<&Path>,
    texts: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let extractor = IntentExtractor::new(config.extractor().clone());
    let processed = classify_texts(&extractor, texts);
    println!("{}", serde_json::to_string_pretty(&processed)?);
    Ok(())
}
