use crate::collaborators::CommentSource;
use async_trait::async_trait;
use chrono::Utc;
use erewhon_core::Comment;
use erewhon_error::ErewhonResult;
use erewhon_intent::KeywordGroup;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

const TEMPLATES: &[&str] = &[
    "This would be cooler if the {object} was wearing a {clothing}",
    "Add more {color} to this, it needs {emotion} vibes",
    "What if the {object} was dancing in a {setting}?",
    "Make it more {style}, this looks too {emotion}",
    "The music should be {emotion}, not so {emotion}",
    "Needs more {object} in the background",
    "This {object} should be {color} instead",
    "Love this but add some {object} flying around",
    "Style should be more {style} and {emotion}",
    "What if there were {object} in the {setting}?",
];

/// Comment source that fills suggestion templates with taxonomy terms.
#[derive(Debug, Clone)]
pub struct MockCommentSource {
    count: usize,
}

impl Default for MockCommentSource {
    fn default() -> Self {
        Self::new(5)
    }
}

impl MockCommentSource {
    /// Creates a source returning `count` comments per fetch.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Fills one random template. Repeated placeholders get the same term.
    pub fn random_text(rng: &mut impl Rng) -> String {
        let template = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
        [
            ("{object}", KeywordGroup::Objects),
            ("{clothing}", KeywordGroup::Clothing),
            ("{color}", KeywordGroup::Colors),
            ("{setting}", KeywordGroup::Settings),
            ("{emotion}", KeywordGroup::Emotions),
            ("{style}", KeywordGroup::Styles),
        ]
        .into_iter()
        .fold(template.to_string(), |text, (placeholder, group)| {
            let term = group.terms().choose(rng).copied().unwrap_or_default();
            text.replace(placeholder, term)
        })
    }

    fn generate(&self, published_id: &str) -> Vec<Comment> {
        let mut rng = rand::thread_rng();
        (0..self.count)
            .map(|i| {
                Comment::new(
                    format!("mock_comment_{}", i),
                    published_id.to_string(),
                    format!("User{}", rng.gen_range(1..=999)),
                    Self::random_text(&mut rng),
                    Utc::now(),
                )
            })
            .collect()
    }
}

#[async_trait]
impl CommentSource for MockCommentSource {
    #[instrument(skip(self))]
    async fn fetch(&self, published_id: &str) -> ErewhonResult<Vec<Comment>> {
        let comments = self.generate(published_id);
        for comment in &comments {
            debug!(author = %comment.author(), text = %comment.text(), "Comment received");
        }
        Ok(comments)
    }
}
