//! The trend-to-revision cycle.

use crate::collaborators::Collaborators;
use crate::config::PipelineConfig;
use derive_getters::Getters;
use erewhon_core::{Content, PipelinePhase};
use erewhon_error::{AcquisitionError, AcquisitionErrorKind, ErewhonResult};
use erewhon_intent::IntentExtractor;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

/// Outcome of one successful cycle.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct CycleReport {
    /// Cycle number, starting at 1
    cycle: u64,
    /// Content published at the start of the cycle
    content: Content,
    /// Revision published from comments, if any suggestions were accepted
    revision: Option<Content>,
    /// Number of suggestions that cleared the confidence floor
    accepted: usize,
}

/// Cycle counts for a call to [`Orchestrator::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct RunSummary {
    /// Cycles that completed
    completed: u64,
    /// Cycles that failed and were followed by a cooldown
    failed: u64,
}

/// Requests that a running orchestrator stop.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    /// Signals shutdown. `run` returns at its next check.
    pub fn shutdown(&self) {
        self.tx.send_replace(true);
    }
}

/// Drives the collaborators through the fixed cycle.
///
/// Trends → content → publish → comments → intent extraction → revision →
/// publish revision. Phases run one at a time; the only mutable state is the
/// current phase, cycle counter and content history.
pub struct Orchestrator {
    collaborators: Collaborators,
    extractor: IntentExtractor,
    config: PipelineConfig,
    phase: PipelinePhase,
    cycle: u64,
    history: Vec<Content>,
    shutdown_tx: Arc<watch::Sender<bool>>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Orchestrator {
    /// Creates an orchestrator over `collaborators`.
    pub fn new(collaborators: Collaborators, config: PipelineConfig) -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            collaborators,
            extractor: IntentExtractor::new(config.extractor().clone()),
            config,
            phase: PipelinePhase::Dormant,
            cycle: 0,
            history: Vec::new(),
            shutdown_tx: Arc::new(tx),
            shutdown_rx: rx,
        }
    }

    /// Creates an orchestrator backed by the mock collaborators.
    pub fn with_mocks(config: PipelineConfig) -> Self {
        let collaborators = Collaborators::mock(&config);
        Self::new(collaborators, config)
    }

    /// Current phase.
    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    /// Number of cycles started so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Every piece of content published so far, originals and revisions.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// The extractor used on incoming comments.
    pub fn extractor(&self) -> &IntentExtractor {
        &self.extractor
    }

    /// Handle for stopping [`run`](Self::run) from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: Arc::clone(&self.shutdown_tx),
        }
    }

    fn enter(&mut self, phase: PipelinePhase) {
        if self.phase != phase {
            info!(from = %self.phase, to = %phase, "Phase transition");
            self.phase = phase;
        }
    }

    fn shutdown_requested(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Runs one cycle.
    ///
    /// On failure the phase is left at [`PipelinePhase::Error`] and the error
    /// is logged with the phase it occurred in.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error, or an acquisition error if the
    /// trend source reports no topics.
    #[instrument(skip(self), fields(cycle = self.cycle + 1))]
    pub async fn run_cycle(&mut self) -> ErewhonResult<CycleReport> {
        self.cycle += 1;
        match self.cycle_phases().await {
            Ok(report) => {
                self.enter(PipelinePhase::Dormant);
                Ok(report)
            }
            Err(e) => {
                let failed_in = self.phase;
                self.enter(PipelinePhase::Error);
                error!(phase = %failed_in, error = %e, "Cycle failed");
                Err(e)
            }
        }
    }

    async fn cycle_phases(&mut self) -> ErewhonResult<CycleReport> {
        self.enter(PipelinePhase::ScanningTrends);
        let topics = self.collaborators.trends.detect().await?;
        if topics.is_empty() {
            return Err(AcquisitionError::new(AcquisitionErrorKind::NoTopics).into());
        }

        self.enter(PipelinePhase::GeneratingContent);
        let content = self.collaborators.synthesizer.synthesize(&topics).await?;
        info!(
            inspiration = %content.inspiration().topic(),
            music = %content.music_prompt(),
            video = %content.video_prompt(),
            "Content generated"
        );

        self.enter(PipelinePhase::Publishing);
        let published_id = self.collaborators.publisher.publish(&content).await?;
        let content = content.with_published_id(published_id.clone());
        self.history.push(content.clone());

        self.enter(PipelinePhase::MonitoringComments);
        let wait = self.config.comment_wait();
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        let comments = self.collaborators.comments.fetch(&published_id).await?;
        let suggestions = self.extractor.extract(&comments);

        let revision = if suggestions.is_empty() {
            info!(comments = comments.len(), "No actionable suggestions");
            None
        } else {
            self.enter(PipelinePhase::ModifyingContent);
            let revision = self
                .collaborators
                .applier
                .apply(&content, &suggestions)
                .await?;

            self.enter(PipelinePhase::Publishing);
            let revised_id = self.collaborators.publisher.publish(&revision).await?;
            let revision = revision.with_published_id(revised_id);
            self.history.push(revision.clone());
            Some(revision)
        };

        Ok(CycleReport {
            cycle: self.cycle,
            content,
            revision,
            accepted: suggestions.len(),
        })
    }

    /// Runs `cycles` cycles, or until shutdown when `None`.
    ///
    /// A failed cycle is followed by the configured cooldown and the loop
    /// continues. A successful one is followed by the cycle pause. Shutdown is
    /// checked before each cycle and interrupts any pause.
    #[instrument(skip(self))]
    pub async fn run(&mut self, cycles: Option<u64>) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut attempted = 0u64;
        info!("Pipeline starting");

        loop {
            if self.shutdown_requested() {
                info!("Shutdown requested");
                break;
            }
            if cycles.is_some_and(|limit| attempted >= limit) {
                break;
            }
            attempted += 1;

            let pause = match self.run_cycle().await {
                Ok(report) => {
                    summary.completed += 1;
                    info!(
                        cycle = report.cycle,
                        accepted = report.accepted,
                        revised = report.revision.is_some(),
                        "Cycle complete"
                    );
                    self.config.cycle_pause()
                }
                Err(_) => {
                    summary.failed += 1;
                    warn!(
                        cooldown_secs = self.config.cooldown().as_secs(),
                        "Cooling down before next cycle"
                    );
                    self.config.cooldown()
                }
            };

            if cycles.is_some_and(|limit| attempted >= limit) {
                break;
            }
            if !self.pause(pause).await {
                info!("Shutdown requested");
                break;
            }
        }

        info!(
            completed = summary.completed,
            failed = summary.failed,
            "Pipeline stopped"
        );
        summary
    }

    /// Sleeps for `duration`; returns false if shutdown arrived first.
    async fn pause(&self, duration: Duration) -> bool {
        let mut rx = self.shutdown_rx.clone();
        tokio::select! {
            _ = tokio::time::sleep(duration) => !self.shutdown_requested(),
            _ = rx.wait_for(|stop| *stop) => false,
        }
    }
}
