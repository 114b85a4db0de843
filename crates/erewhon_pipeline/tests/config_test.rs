use erewhon_pipeline::PipelineConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
cycle_pause_secs = 10
cooldown_secs = 30
topics_per_scan = 2
simulate_latency = false

[extractor]
narrative_enabled = true
max_visual_terms = 2
"#
    )
    .unwrap();

    let config = PipelineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.cycle_pause(), Duration::from_secs(10));
    assert_eq!(config.cooldown(), Duration::from_secs(30));
    assert_eq!(*config.topics_per_scan(), 2);
    assert_eq!(*config.comments_per_fetch(), 5);
    assert!(!config.simulate_latency());
    assert!(*config.extractor().narrative_enabled());
    assert_eq!(*config.extractor().max_visual_terms(), 2);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = PipelineConfig::from_file("/nonexistent/erewhon.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_unknown_extractor_field_rejected() {
    let result = PipelineConfig::from_toml_str(
        r#"
[extractor]
confidence_threshold = 0.5
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_immediate_config_has_no_waits() {
    let config = PipelineConfig::immediate();
    assert!(config.cycle_pause().is_zero());
    assert!(config.cooldown().is_zero());
    assert!(config.comment_wait().is_zero());
    assert!(!config.simulate_latency());
}
