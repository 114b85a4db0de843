use crate::collaborators::TrendSource;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use erewhon_core::{TrendingTopic, TrendingTopicBuilder};
use erewhon_error::{AcquisitionError, AcquisitionErrorKind, ErewhonResult};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{info, instrument};

const TOPICS: &[&str] = &[
    "Climate change protests in Berlin",
    "New AI breakthrough in quantum computing",
    "Celebrity wedding scandal",
    "Cryptocurrency market volatility",
    "Space exploration milestone",
    "Viral dance trend on social media",
    "Economic recession fears",
    "Scientific discovery about marine life",
    "Political debate about healthcare",
    "Tech company merger announcement",
    "Artist releases surprise album",
    "Sports championship upset victory",
    "Natural disaster relief efforts",
    "Fashion week controversial design",
    "Food shortage in developing regions",
    "Archaeological discovery ancient civilization",
    "Renewable energy breakthrough",
    "Social media platform policy change",
    "International trade agreement signed",
    "Medical treatment shows promising results",
];

const SOURCES: &[&str] = &["Twitter", "Google Trends", "Reddit", "News API", "TikTok"];

/// Trend source that samples from a fixed list of plausible headlines.
#[derive(Debug, Clone)]
pub struct MockTrendSource {
    count: usize,
    latency: Duration,
}

impl Default for MockTrendSource {
    fn default() -> Self {
        Self::new(3)
    }
}

impl MockTrendSource {
    /// Creates a source returning `count` distinct topics per scan.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            latency: Duration::ZERO,
        }
    }

    /// Sets the simulated API latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn context_for(topic: &str, rng: &mut impl Rng) -> String {
        match rng.gen_range(0..5) {
            0 => format!(
                "Social media engagement spike in the last 2 hours around '{}'",
                topic
            ),
            1 => format!("News mentions of '{}' increased 340% today", topic),
            2 => format!("Search volume for '{}' trending upward globally", topic),
            3 => format!(
                "Celebrity influencers discussing '{}' driving viral spread",
                topic
            ),
            _ => format!("Breaking news coverage of '{}' across major outlets", topic),
        }
    }

    fn sample(&self) -> ErewhonResult<Vec<TrendingTopic>> {
        let mut rng = rand::thread_rng();
        let now = Utc::now();

        let mut topics = TOPICS
            .choose_multiple(&mut rng, self.count)
            .map(|topic| {
                TrendingTopicBuilder::default()
                    .topic(*topic)
                    .source(*SOURCES.choose(&mut rng).unwrap_or(&"Twitter"))
                    .relevance(rng.gen_range(0.6_f64..1.0))
                    .observed_at(now - ChronoDuration::minutes(rng.gen_range(5..=120)))
                    .context(Some(Self::context_for(topic, &mut rng)))
                    .build()
                    .map_err(|e| {
                        AcquisitionError::new(AcquisitionErrorKind::TrendSourceUnavailable(
                            e.to_string(),
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        topics.sort_by(|a, b| b.relevance().total_cmp(a.relevance()));
        Ok(topics)
    }
}

#[async_trait]
impl TrendSource for MockTrendSource {
    #[instrument(skip(self), fields(count = self.count))]
    async fn detect(&self) -> ErewhonResult<Vec<TrendingTopic>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let topics = self.sample()?;
        info!(found = topics.len(), "Trending topics detected");
        for topic in &topics {
            info!(
                topic = %topic.topic(),
                source = %topic.source(),
                relevance = %format!("{:.2}", topic.relevance()),
                "Trending topic"
            );
        }
        Ok(topics)
    }
}
