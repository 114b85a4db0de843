use erewhon::{
    Category, ExtractorConfig, IntentExtractor, Orchestrator, PipelineConfig, TelemetryConfig,
    classify_texts, literal_comments,
};

#[test]
fn test_literal_comments_are_labelled() {
    let comments = literal_comments(&["add a hat", "nice"]);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].id(), "cli_1");
    assert_eq!(comments[1].source_content_id(), "cli");
    assert_eq!(comments[0].text(), "add a hat");
}

#[test]
fn test_classify_texts_serializes_worked_examples() {
    let texts = [
        "Would be cooler if the robot was wearing a cape",
        "too dark, style should be cyberpunk",
        "music should be louder",
        "first!!",
    ];
    let processed = classify_texts(&IntentExtractor::default(), &texts);
    let categories: Vec<Category> = processed.iter().map(|p| *p.category()).collect();
    assert_eq!(
        categories,
        vec![Category::Visual, Category::Audio, Category::Style]
    );

    let json = serde_json::to_value(&processed).unwrap();
    assert_eq!(json[0]["category"], "visual");
    assert_eq!(json[0]["prompt_fragment"], "add robot, cape");
    assert_eq!(json[0]["comment"]["id"], "cli_0");
    assert_eq!(json[1]["confidence"], 0.7);
}

#[test]
fn test_classify_respects_extractor_config() {
    let extractor = IntentExtractor::new(
        ExtractorConfig::builder()
            .confidence_floor(0.65)
            .build()
            .unwrap(),
    );
    let processed = classify_texts(&extractor, &["music should be louder", "too plain"]);
    assert_eq!(processed.len(), 1);
    assert_eq!(*processed[0].category(), Category::Audio);
}

#[test]
fn test_telemetry_config_builder() {
    let config = TelemetryConfig::new("erewhon-test")
        .with_log_level("debug")
        .with_json_logs(true);
    assert_eq!(config.service_name, "erewhon-test");
    assert_eq!(config.log_level, "debug");
    assert!(config.json_logs);
}

#[tokio::test]
async fn test_facade_runs_mock_pipeline() {
    let mut orchestrator = Orchestrator::with_mocks(PipelineConfig::immediate());
    let report = orchestrator.run_cycle().await.unwrap();
    assert_eq!(*report.cycle(), 1);
    assert!(report.content().published_id().is_some());
}
