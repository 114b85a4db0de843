//! Mock collaborator behavior.

use erewhon_core::{Category, ContentBuilder, ProcessedComment, TrendingTopicBuilder};
use erewhon_error::ErewhonErrorKind;
use erewhon_intent::IntentExtractor;
use erewhon_pipeline::mock::{
    CommentFixture, MockCommentSource, MockContentSynthesizer, MockPublisher, MockTrendSource,
};
use erewhon_pipeline::{
    CommentSource, ContentSynthesizer, ModificationApplier, Publisher, RevisionApplier,
    TrendSource,
};

fn topic(name: &str) -> erewhon_core::TrendingTopic {
    TrendingTopicBuilder::default()
        .topic(name)
        .source("Google Trends")
        .relevance(0.8)
        .build()
        .expect("Valid topic")
}

#[tokio::test]
async fn test_trend_source_returns_distinct_sorted_topics() {
    let topics = MockTrendSource::new(5).detect().await.unwrap();
    assert_eq!(topics.len(), 5);

    for pair in topics.windows(2) {
        assert!(pair[0].relevance() >= pair[1].relevance());
        assert_ne!(pair[0].topic(), pair[1].topic());
    }
    for topic in &topics {
        assert!((0.6..1.0).contains(topic.relevance()));
        assert!(topic.context().is_some());
    }
}

#[tokio::test]
async fn test_synthesizer_hints_secondary_topic() {
    let topics = vec![
        topic("New AI breakthrough in quantum computing"),
        topic("Climate Change Summit"),
    ];
    let content = MockContentSynthesizer::new()
        .synthesize(&topics)
        .await
        .unwrap();

    assert!(
        content
            .music_prompt()
            .contains("mood inspired by New AI breakthrough in quantum computing")
    );
    assert!(
        content
            .music_prompt()
            .ends_with(" with hints of climate change summit")
    );
    assert!(
        content
            .video_prompt()
            .ends_with("representing New AI breakthrough in quantum computing")
    );
    let music_url = content.music_asset_url().as_deref().unwrap();
    assert!(music_url.starts_with("https://mock-suno-api.com/tracks/"));
    assert!(music_url.ends_with(".mp3"));
    assert!(content.parent_id().is_none());
}

#[tokio::test]
async fn test_synthesizer_rejects_empty_topics() {
    let err = MockContentSynthesizer::new()
        .synthesize(&[])
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ErewhonErrorKind::Generation(_)));
}

#[tokio::test]
async fn test_publisher_numbers_originals_and_revisions() {
    let publisher = MockPublisher::new();
    let original = MockContentSynthesizer::new()
        .synthesize(&[topic("Space exploration milestone")])
        .await
        .unwrap();

    assert_eq!(publisher.publish(&original).await.unwrap(), "erewhon_video_1");

    let suggestions = IntentExtractor::default().extract(&[CommentFixture::new("add a hat").build()]);
    let applier = RevisionApplier::default();
    let first = applier.apply(&original, &suggestions).await.unwrap();
    let second = applier.apply(&first, &suggestions).await.unwrap();

    assert_eq!(publisher.publish(&first).await.unwrap(), "erewhon_video_1_v2");
    assert_eq!(publisher.publish(&second).await.unwrap(), "erewhon_video_1_v3");

    let other = MockContentSynthesizer::new()
        .synthesize(&[topic("Fashion week controversial design")])
        .await
        .unwrap();
    assert_eq!(publisher.publish(&other).await.unwrap(), "erewhon_video_2");
    assert_eq!(publisher.published_count(), 2);
}

#[tokio::test]
async fn test_publisher_rejects_unknown_parent() {
    let orphan = ContentBuilder::default()
        .id("orphan")
        .inspiration(topic("Economic recession fears"))
        .parent_id(Some("never-published".to_string()))
        .music_prompt("jazz")
        .video_prompt("noir")
        .build()
        .unwrap();

    let err = MockPublisher::new().publish(&orphan).await.unwrap_err();
    assert!(matches!(err.kind(), ErewhonErrorKind::Publish(_)));
}

#[tokio::test]
async fn test_failing_publisher() {
    let content = MockContentSynthesizer::new()
        .synthesize(&[topic("Space exploration milestone")])
        .await
        .unwrap();
    assert!(MockPublisher::failing().publish(&content).await.is_err());
}

#[tokio::test]
async fn test_comment_source_labels_comments() {
    let comments = MockCommentSource::new(4)
        .fetch("erewhon_video_7")
        .await
        .unwrap();

    assert_eq!(comments.len(), 4);
    for (i, comment) in comments.iter().enumerate() {
        assert_eq!(comment.id(), &format!("mock_comment_{}", i));
        assert_eq!(comment.source_content_id(), "erewhon_video_7");
        assert!(comment.author().starts_with("User"));
        assert!(!comment.text().contains('{'));
    }
}

#[test]
fn test_template_comments_are_classifiable() {
    let mut rng = rand::thread_rng();
    let extractor = IntentExtractor::default();
    for _ in 0..50 {
        let text = MockCommentSource::random_text(&mut rng);
        let comment = CommentFixture::new(text.clone()).build();
        assert!(
            extractor.classify(&comment).unwrap().is_some(),
            "template comment not classified: {}",
            text
        );
    }
}

#[tokio::test]
async fn test_applier_logs_operation_per_suggestion() {
    let original = MockContentSynthesizer::new()
        .synthesize(&[topic("Space exploration milestone")])
        .await
        .unwrap();
    let suggestions: Vec<ProcessedComment> = IntentExtractor::default().extract(&[
        CommentFixture::new("music should be louder").id("a").build(),
        CommentFixture::new("too dark, style should be cyberpunk")
            .id("b")
            .build(),
    ]);
    assert_eq!(*suggestions[0].category(), Category::Audio);

    let revision = RevisionApplier::default()
        .apply(&original, &suggestions)
        .await
        .unwrap();
    assert_eq!(
        revision.modifications(),
        &vec![
            "Applied speed adjustment: adjust audio to be louder".to_string(),
            "Applied style change: in cyberpunk style".to_string(),
        ]
    );
    assert!(revision.published_id().is_none());
    assert!(
        revision
            .video_asset_url()
            .as_deref()
            .unwrap()
            .starts_with("https://mock-runway-api.com/videos/")
    );
}

#[tokio::test]
async fn test_applier_rejects_empty_suggestions() {
    let original = MockContentSynthesizer::new()
        .synthesize(&[topic("Space exploration milestone")])
        .await
        .unwrap();
    let err = RevisionApplier::default()
        .apply(&original, &[])
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ErewhonErrorKind::Generation(_)));
}
