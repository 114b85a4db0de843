use crate::collaborators::ContentSynthesizer;
use async_trait::async_trait;
use erewhon_core::{Content, ContentBuilder, TrendingTopic};
use erewhon_error::{ErewhonResult, GenerationError, GenerationErrorKind};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{info, instrument};

const MUSIC_STYLES: &[&str] = &[
    "ambient electronic",
    "synthwave",
    "lo-fi hip hop",
    "orchestral",
    "industrial rock",
    "jazz fusion",
    "trap beats",
    "classical piano",
    "reggae dub",
    "experimental noise",
    "folk acoustic",
    "techno",
];

const MUSIC_MOODS: &[&str] = &[
    "melancholic",
    "energetic",
    "mysterious",
    "hopeful",
    "intense",
    "dreamy",
    "aggressive",
    "peaceful",
    "chaotic",
    "uplifting",
];

const VISUAL_STYLES: &[&str] = &[
    "cyberpunk neon",
    "natural documentary",
    "abstract art",
    "retro 80s",
    "minimalist geometric",
    "surreal fantasy",
    "gritty urban",
    "cosmic space",
    "vintage film noir",
    "colorful pop art",
    "gothic dark",
    "bright pastel",
];

const VIDEO_SUBJECTS: &[&str] = &[
    "dancing robot",
    "floating geometric shapes",
    "time-lapse cityscape",
    "morphing liquid metal",
    "flying through clouds",
    "underwater journey",
    "kaleidoscope patterns",
    "growing digital forest",
    "spinning galaxy",
    "walking through neon tunnels",
    "transforming architecture",
    "abstract faces",
];

/// Keyword family a topic headline falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Tech,
    Nature,
    Conflict,
    Glamour,
    Other,
}

impl Theme {
    fn of(topic: &str) -> Self {
        let lowered = topic.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let any = |keys: &[&str]| keys.iter().any(|k| words.contains(k));

        if any(&["tech", "ai", "quantum", "cyber", "breakthrough"]) {
            Self::Tech
        } else if any(&["climate", "nature", "ocean", "marine"]) {
            Self::Nature
        } else if any(&["protest", "protests", "politics", "political", "scandal"]) {
            Self::Conflict
        } else if any(&["celebrity", "wedding", "fashion"]) {
            Self::Glamour
        } else {
            Self::Other
        }
    }

    fn music_styles(self) -> &'static [&'static str] {
        match self {
            Self::Tech => &["synthwave", "ambient electronic", "techno"],
            Self::Nature => &["ambient electronic", "orchestral", "folk acoustic"],
            Self::Conflict => &["industrial rock", "trap beats", "experimental noise"],
            Self::Glamour => &["lo-fi hip hop", "jazz fusion", "classical piano"],
            Self::Other => MUSIC_STYLES,
        }
    }

    fn visual(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            Self::Tech => (
                &["cyberpunk neon", "abstract art", "cosmic space"],
                &[
                    "dancing robot",
                    "morphing liquid metal",
                    "floating geometric shapes",
                ],
            ),
            Self::Nature => (
                &["natural documentary", "cosmic space"],
                &[
                    "underwater journey",
                    "growing digital forest",
                    "time-lapse cityscape",
                ],
            ),
            Self::Glamour => (
                &["retro 80s", "colorful pop art", "bright pastel"],
                &[
                    "abstract faces",
                    "kaleidoscope patterns",
                    "transforming architecture",
                ],
            ),
            Self::Conflict | Self::Other => (VISUAL_STYLES, VIDEO_SUBJECTS),
        }
    }
}

fn pick(options: &'static [&'static str], rng: &mut impl Rng) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Synthesizer that builds prompts from templates and fakes asset urls.
#[derive(Debug, Clone, Default)]
pub struct MockContentSynthesizer {
    latency: Duration,
}

impl MockContentSynthesizer {
    /// Creates a synthesizer with no simulated latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated generation time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Music prompt for `primary`, hinting at the first secondary topic.
    pub fn music_prompt(primary: &TrendingTopic, secondary: Option<&TrendingTopic>) -> String {
        let mut rng = rand::thread_rng();
        let theme = Theme::of(primary.topic());
        let style = pick(theme.music_styles(), &mut rng);
        let mood = pick(MUSIC_MOODS, &mut rng);

        let mut prompt = format!(
            "{} track with {} mood inspired by {}",
            style,
            mood,
            primary.topic()
        );
        if let Some(secondary) = secondary {
            prompt.push_str(&format!(
                " with hints of {}",
                secondary.topic().to_lowercase()
            ));
        }
        prompt
    }

    /// Video prompt for `primary`.
    pub fn video_prompt(primary: &TrendingTopic) -> String {
        let mut rng = rand::thread_rng();
        let (styles, subjects) = Theme::of(primary.topic()).visual();
        format!(
            "{} style video featuring {} representing {}",
            pick(styles, &mut rng),
            pick(subjects, &mut rng),
            primary.topic()
        )
    }

    fn short_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
    }

    fn build(&self, topics: &[TrendingTopic]) -> ErewhonResult<Content> {
        let primary = topics
            .first()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::NoInspiration))?;

        ContentBuilder::default()
            .id(uuid::Uuid::new_v4().to_string())
            .inspiration(primary.clone())
            .music_prompt(Self::music_prompt(primary, topics.get(1)))
            .video_prompt(Self::video_prompt(primary))
            .music_asset_url(Some(format!(
                "https://mock-suno-api.com/tracks/{}.mp3",
                Self::short_id()
            )))
            .video_asset_url(Some(format!(
                "https://mock-runway-api.com/videos/{}.mp4",
                Self::short_id()
            )))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::SynthesisFailed(e.to_string())).into()
            })
    }
}

#[async_trait]
impl ContentSynthesizer for MockContentSynthesizer {
    #[instrument(skip(self, topics), fields(topics = topics.len()))]
    async fn synthesize(&self, topics: &[TrendingTopic]) -> ErewhonResult<Content> {
        if topics.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::NoInspiration).into());
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let content = self.build(topics)?;
        info!(
            inspiration = %content.inspiration().topic(),
            music = %content.music_prompt(),
            video = %content.video_prompt(),
            "Content generation complete"
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_detection() {
        assert_eq!(Theme::of("New AI breakthrough in quantum computing"), Theme::Tech);
        assert_eq!(Theme::of("Scientific discovery about marine life"), Theme::Nature);
        assert_eq!(Theme::of("Celebrity wedding scandal"), Theme::Conflict);
        assert_eq!(Theme::of("Fashion week controversial design"), Theme::Glamour);
        assert_eq!(Theme::of("Economic recession fears"), Theme::Other);
    }

    #[test]
    fn test_short_id_length() {
        assert_eq!(MockContentSynthesizer::short_id().len(), 8);
    }
}
