use derive_getters::Getters;
use erewhon_error::{ConfigError, ErewhonResult};
use erewhon_intent::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the pipeline orchestrator and its mock collaborators.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct PipelineConfig {
    /// Pause between successful cycles (seconds)
    #[serde(default = "default_cycle_pause_secs")]
    cycle_pause_secs: u64,
    /// Cooldown after a failed cycle before retrying (seconds)
    #[serde(default = "default_cooldown_secs")]
    cooldown_secs: u64,
    /// Time to wait for comments to arrive after publishing (seconds)
    #[serde(default = "default_comment_wait_secs")]
    comment_wait_secs: u64,
    /// Topics requested from the trend source per scan
    #[serde(default = "default_topics_per_scan")]
    topics_per_scan: usize,
    /// Comments requested from the comment source per fetch
    #[serde(default = "default_comments_per_fetch")]
    comments_per_fetch: usize,
    /// Whether mock collaborators sleep to imitate network latency
    #[serde(default = "default_simulate_latency")]
    simulate_latency: bool,
    /// Intent extractor settings
    #[serde(default)]
    extractor: ExtractorConfig,
}

fn default_cycle_pause_secs() -> u64 {
    1
}

fn default_cooldown_secs() -> u64 {
    60
}

fn default_comment_wait_secs() -> u64 {
    2
}

fn default_topics_per_scan() -> usize {
    3
}

fn default_comments_per_fetch() -> usize {
    5
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cycle_pause_secs: default_cycle_pause_secs(),
            cooldown_secs: default_cooldown_secs(),
            comment_wait_secs: default_comment_wait_secs(),
            topics_per_scan: default_topics_per_scan(),
            comments_per_fetch: default_comments_per_fetch(),
            simulate_latency: default_simulate_latency(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load pipeline configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ErewhonResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse pipeline configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ErewhonResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks counts are non-zero and the extractor settings are in range.
    pub fn validate(&self) -> ErewhonResult<()> {
        if self.topics_per_scan == 0 {
            return Err(ConfigError::new("topics_per_scan must be at least 1").into());
        }
        self.extractor.validate()
    }

    /// Config with every wait set to zero and latency simulation off.
    pub fn immediate() -> Self {
        Self {
            cycle_pause_secs: 0,
            cooldown_secs: 0,
            comment_wait_secs: 0,
            simulate_latency: false,
            ..Self::default()
        }
    }

    /// Disables or enables simulated collaborator latency.
    pub fn with_simulated_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    /// Pause between successful cycles.
    pub fn cycle_pause(&self) -> Duration {
        Duration::from_secs(self.cycle_pause_secs)
    }

    /// Cooldown after a failed cycle.
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Wait between publishing and fetching comments.
    pub fn comment_wait(&self) -> Duration {
        Duration::from_secs(self.comment_wait_secs)
    }
}
