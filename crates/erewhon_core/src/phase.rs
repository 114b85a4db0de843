//! Pipeline phases.

use serde::{Deserialize, Serialize};

/// The phase the orchestrator is currently in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelinePhase {
    /// Idle between cycles
    #[default]
    Dormant,
    /// Waiting on the trend source
    ScanningTrends,
    /// Waiting on the content synthesizer
    GeneratingContent,
    /// Waiting on the publisher
    Publishing,
    /// Collecting and classifying comments
    MonitoringComments,
    /// Folding suggestions into a revision
    ModifyingContent,
    /// Last cycle failed; cooling down before retry
    Error,
}
