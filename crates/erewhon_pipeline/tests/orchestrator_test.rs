//! Orchestrator behavior with scripted collaborators.

use async_trait::async_trait;
use erewhon_core::{Comment, PipelinePhase, TrendingTopic, TrendingTopicBuilder};
use erewhon_error::{AcquisitionError, AcquisitionErrorKind, ErewhonErrorKind, ErewhonResult};
use erewhon_pipeline::mock::{CommentFixture, MockContentSynthesizer, MockPublisher};
use erewhon_pipeline::{
    Collaborators, CommentSource, Orchestrator, PipelineConfig, RevisionApplier, TrendSource,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Trend source that fails a fixed number of times before succeeding.
struct FlakyTrends {
    failures_left: AtomicUsize,
}

impl FlakyTrends {
    fn failing(times: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(times),
        }
    }
}

#[async_trait]
impl TrendSource for FlakyTrends {
    async fn detect(&self) -> ErewhonResult<Vec<TrendingTopic>> {
        let remaining = self.failures_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_left.store(remaining - 1, Ordering::SeqCst);
            return Err(AcquisitionError::new(AcquisitionErrorKind::TrendSourceUnavailable(
                "rate limited".to_string(),
            ))
            .into());
        }
        Ok(vec![
            TrendingTopicBuilder::default()
                .topic("Space exploration milestone")
                .source("Reddit")
                .relevance(0.9)
                .build()
                .expect("Valid topic"),
        ])
    }
}

struct EmptyTrends;

#[async_trait]
impl TrendSource for EmptyTrends {
    async fn detect(&self) -> ErewhonResult<Vec<TrendingTopic>> {
        Ok(Vec::new())
    }
}

/// Comment source that always returns the same texts.
struct FixedComments {
    texts: Vec<&'static str>,
}

#[async_trait]
impl CommentSource for FixedComments {
    async fn fetch(&self, published_id: &str) -> ErewhonResult<Vec<Comment>> {
        Ok(self
            .texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                CommentFixture::new(*text)
                    .id(format!("fixed_{}", i))
                    .on(published_id)
                    .build()
            })
            .collect())
    }
}

fn collaborators(trends: Arc<dyn TrendSource>, texts: Vec<&'static str>) -> Collaborators {
    Collaborators {
        trends,
        synthesizer: Arc::new(MockContentSynthesizer::new()),
        publisher: Arc::new(MockPublisher::new()),
        comments: Arc::new(FixedComments { texts }),
        applier: Arc::new(RevisionApplier::default()),
    }
}

#[tokio::test]
async fn test_cycle_publishes_revision_referencing_parent() {
    let mut orchestrator = Orchestrator::new(
        collaborators(
            Arc::new(FlakyTrends::failing(0)),
            vec![
                "Would be cooler if the robot was wearing a cape",
                "first!!",
                "nice work",
            ],
        ),
        PipelineConfig::immediate(),
    );

    let report = orchestrator.run_cycle().await.expect("Cycle succeeds");
    assert_eq!(*report.cycle(), 1);
    assert_eq!(*report.accepted(), 1);
    assert_eq!(
        report.content().published_id().as_deref(),
        Some("erewhon_video_1")
    );

    let revision = report.revision().as_ref().expect("Revision produced");
    assert_eq!(revision.parent_id().as_ref(), Some(report.content().id()));
    assert_ne!(revision.id(), report.content().id());
    assert_eq!(
        revision.video_prompt(),
        &format!("{} modified", report.content().video_prompt())
    );
    assert_eq!(
        revision.modifications(),
        &vec!["Applied object add: add robot, cape".to_string()]
    );
    assert_eq!(
        revision.published_id().as_deref(),
        Some("erewhon_video_1_v2")
    );

    assert_eq!(orchestrator.phase(), PipelinePhase::Dormant);
    assert_eq!(orchestrator.history().len(), 2);
}

#[tokio::test]
async fn test_revision_skipped_without_suggestions() {
    let mut orchestrator = Orchestrator::new(
        collaborators(Arc::new(FlakyTrends::failing(0)), vec!["nice work", "lol"]),
        PipelineConfig::immediate(),
    );

    let report = orchestrator.run_cycle().await.expect("Cycle succeeds");
    assert_eq!(*report.accepted(), 0);
    assert!(report.revision().is_none());
    assert_eq!(orchestrator.history().len(), 1);
}

#[tokio::test]
async fn test_empty_topics_is_acquisition_failure() {
    let mut orchestrator = Orchestrator::new(
        collaborators(Arc::new(EmptyTrends), vec!["add a hat"]),
        PipelineConfig::immediate(),
    );

    let err = orchestrator.run_cycle().await.unwrap_err();
    assert!(matches!(err.kind(), ErewhonErrorKind::Acquisition(_)));
    assert!(!err.is_per_item());
    assert_eq!(orchestrator.phase(), PipelinePhase::Error);
    assert!(orchestrator.history().is_empty());
}

#[tokio::test]
async fn test_publish_failure_sets_error_phase() {
    let mut collaborators = collaborators(Arc::new(FlakyTrends::failing(0)), vec!["add a hat"]);
    collaborators.publisher = Arc::new(MockPublisher::failing());
    let mut orchestrator = Orchestrator::new(collaborators, PipelineConfig::immediate());

    let err = orchestrator.run_cycle().await.unwrap_err();
    assert!(matches!(err.kind(), ErewhonErrorKind::Publish(_)));
    assert_eq!(orchestrator.phase(), PipelinePhase::Error);
}

#[tokio::test]
async fn test_run_recovers_from_failing_cycle() {
    let mut orchestrator = Orchestrator::new(
        collaborators(Arc::new(FlakyTrends::failing(1)), vec!["add a hat"]),
        PipelineConfig::immediate(),
    );

    let summary = orchestrator.run(Some(3)).await;
    assert_eq!(*summary.failed(), 1);
    assert_eq!(*summary.completed(), 2);
    assert_eq!(orchestrator.cycle(), 3);
    assert_eq!(orchestrator.phase(), PipelinePhase::Dormant);
    // Two originals and two revisions.
    assert_eq!(orchestrator.history().len(), 4);
    assert_eq!(
        orchestrator.history()[2].published_id().as_deref(),
        Some("erewhon_video_2")
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_cycle_waits_for_cooldown() {
    let config = PipelineConfig::from_toml_str(
        r#"
cycle_pause_secs = 0
comment_wait_secs = 0
cooldown_secs = 60
simulate_latency = false
"#,
    )
    .expect("Valid config");
    let mut orchestrator = Orchestrator::new(
        collaborators(Arc::new(FlakyTrends::failing(1)), vec!["add a hat"]),
        config,
    );

    let started = tokio::time::Instant::now();
    let summary = orchestrator.run(Some(2)).await;
    assert_eq!(*summary.failed(), 1);
    assert_eq!(*summary.completed(), 1);
    assert!(started.elapsed() >= Duration::from_secs(60));
}

#[tokio::test]
async fn test_shutdown_before_run_stops_immediately() {
    let mut orchestrator = Orchestrator::new(
        collaborators(Arc::new(FlakyTrends::failing(0)), vec!["add a hat"]),
        PipelineConfig::immediate(),
    );
    orchestrator.shutdown_handle().shutdown();

    let summary = orchestrator.run(None).await;
    assert_eq!(*summary.completed(), 0);
    assert_eq!(orchestrator.cycle(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_interrupts_cycle_pause() {
    let config = PipelineConfig::from_toml_str(
        r#"
cycle_pause_secs = 3600
comment_wait_secs = 0
simulate_latency = false
"#,
    )
    .expect("Valid config");
    let mut orchestrator = Orchestrator::new(
        collaborators(Arc::new(FlakyTrends::failing(0)), vec!["add a hat"]),
        config,
    );

    let handle = orchestrator.shutdown_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(5)).await;
        handle.shutdown();
    });

    let started = tokio::time::Instant::now();
    let summary = orchestrator.run(None).await;
    assert_eq!(*summary.completed(), 1);
    assert!(started.elapsed() < Duration::from_secs(3600));
}

#[tokio::test]
async fn test_mock_collaborators_run_end_to_end() {
    let mut orchestrator = Orchestrator::with_mocks(PipelineConfig::immediate());
    let summary = orchestrator.run(Some(2)).await;

    assert_eq!(*summary.completed(), 2);
    assert_eq!(*summary.failed(), 0);
    let originals: Vec<_> = orchestrator
        .history()
        .iter()
        .filter(|c| !c.is_revision())
        .collect();
    assert_eq!(originals.len(), 2);
    for revision in orchestrator.history().iter().filter(|c| c.is_revision()) {
        assert!(!revision.modifications().is_empty());
        assert!(revision.video_prompt().ends_with(" modified"));
    }
}
