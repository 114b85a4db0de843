//! Extractor tuning knobs.

use derive_getters::Getters;
use erewhon_error::{ConfigError, ErewhonResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Thresholds and switches for the [`IntentExtractor`](crate::IntentExtractor).
///
/// The confidence floor and the general-tier confidence are independent
/// settings: moving either one changes which keyword-only comments survive.
///
/// # Examples
///
/// ```
/// use erewhon_intent::ExtractorConfig;
///
/// let config = ExtractorConfig::default();
/// assert_eq!(*config.confidence_floor(), 0.3);
/// assert_eq!(*config.general_confidence(), 0.4);
/// assert!(!*config.narrative_enabled());
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(deny_unknown_fields)]
#[builder(default)]
pub struct ExtractorConfig {
    /// Results must score strictly above this to be kept.
    #[serde(default = "default_confidence_floor")]
    confidence_floor: f64,

    /// Confidence given to keyword-only (general) matches.
    #[serde(default = "default_general_confidence")]
    general_confidence: f64,

    /// Check the narrative table after audio.
    #[serde(default)]
    narrative_enabled: bool,

    /// Maximum taxonomy terms named in a visual prompt fragment.
    #[serde(default = "default_max_visual_terms")]
    max_visual_terms: usize,
}

fn default_confidence_floor() -> f64 {
    0.3
}

fn default_general_confidence() -> f64 {
    0.4
}

fn default_max_visual_terms() -> usize {
    3
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            confidence_floor: default_confidence_floor(),
            general_confidence: default_general_confidence(),
            narrative_enabled: false,
            max_visual_terms: default_max_visual_terms(),
        }
    }
}

impl ExtractorConfig {
    /// Creates a new config builder.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// Parses a config from a TOML string and validates it.
    pub fn from_toml_str(content: &str) -> ErewhonResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse extractor config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates that scores are in [0, 1] and at least one visual term is shown.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> ErewhonResult<()> {
        for (name, value) in [
            ("confidence_floor", self.confidence_floor),
            ("general_confidence", self.general_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::out_of_range(name, value).into());
            }
        }
        if self.max_visual_terms == 0 {
            return Err(ConfigError::new("max_visual_terms must be at least 1").into());
        }
        if self.general_confidence <= self.confidence_floor {
            warn!(
                general_confidence = self.general_confidence,
                confidence_floor = self.confidence_floor,
                "General matches can never clear the confidence floor"
            );
        }
        Ok(())
    }
}
