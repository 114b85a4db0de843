//! Ordered regex tables and per-category prompt fragment rules.

use crate::taxonomy::{KeywordGroup, harvest_terms};
use erewhon_core::Category;
use regex::Regex;
use std::sync::LazyLock;

const VISUAL_PATTERNS: &[&str] = &[
    r"(would be|look) (cool|better|awesome)(er)? (if|with) (.+)",
    r"(add|include|show) (.+)",
    r"what if (.+)",
    r"should have (.+)",
    r"needs more (.+)",
    r"make it (.+)",
    r"change (.+) to (.+)",
];

const STYLE_PATTERNS: &[&str] = &[
    r"(more|less) (.+)",
    r"too (.+)",
    r"not enough (.+)",
    r"style should be (.+)",
    r"reminds me of (.+)",
];

const AUDIO_PATTERNS: &[&str] = &[
    r"music (should|needs) (.+)",
    r"sound (too|not) (.+)",
    r"beat should (.+)",
    r"tempo (.+)",
];

const NARRATIVE_PATTERNS: &[&str] = &[
    r"story should (.+)",
    r"what if the (.+)",
    r"character should (.+)",
    r"plot needs (.+)",
];

/// Generic style descriptors, tried when no taxonomy style is named.
const STYLE_DESCRIPTORS: &[&str] = &[
    "darker",
    "brighter",
    "more colorful",
    "simpler",
    "complex",
    "realistic",
];

const AUDIO_TERMS: &[&str] = &[
    "faster", "slower", "louder", "quieter", "bass", "drums", "melody",
];

const VISUAL_CONFIDENCE: f64 = 0.8;
const STYLE_CONFIDENCE: f64 = 0.6;
const AUDIO_CONFIDENCE: f64 = 0.7;
const NARRATIVE_CONFIDENCE: f64 = 0.5;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Valid built-in pattern"))
        .collect()
}

static VISUAL: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(VISUAL_PATTERNS));
static STYLE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(STYLE_PATTERNS));
static AUDIO: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(AUDIO_PATTERNS));
static NARRATIVE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(NARRATIVE_PATTERNS));

fn patterns_for(category: Category) -> &'static [Regex] {
    match category {
        Category::Visual => VISUAL.as_slice(),
        Category::Style => STYLE.as_slice(),
        Category::Audio => AUDIO.as_slice(),
        Category::Narrative => NARRATIVE.as_slice(),
        Category::General => &[],
    }
}

/// Confidence assigned when a category's pattern table fires.
///
/// `General` has no pattern table; its confidence is configured separately.
pub fn tier_confidence(category: Category) -> Option<f64> {
    match category {
        Category::Visual => Some(VISUAL_CONFIDENCE),
        Category::Style => Some(STYLE_CONFIDENCE),
        Category::Audio => Some(AUDIO_CONFIDENCE),
        Category::Narrative => Some(NARRATIVE_CONFIDENCE),
        Category::General => None,
    }
}

/// The first pattern of a category that matched a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Category whose table matched
    pub category: Category,
    /// Full matched span
    pub span: String,
    /// Last non-empty capture group, the directive itself
    pub directive: Option<String>,
}

/// Scans a category's pattern table in order and returns the first match.
///
/// # Examples
///
/// ```
/// use erewhon_core::Category;
/// use erewhon_intent::match_category;
///
/// let m = match_category(Category::Audio, "the music should be louder").unwrap();
/// assert_eq!(m.span, "music should be louder");
/// assert!(match_category(Category::Audio, "add a hat").is_none());
/// ```
pub fn match_category(category: Category, lowered: &str) -> Option<PatternMatch> {
    patterns_for(category).iter().find_map(|pattern| {
        pattern.captures(lowered).map(|caps| PatternMatch {
            category,
            span: caps[0].to_string(),
            directive: caps
                .iter()
                .skip(1)
                .flatten()
                .last()
                .map(|m| m.as_str().to_string()),
        })
    })
}

impl PatternMatch {
    /// Human-readable description naming the matched span.
    pub fn intent_description(&self) -> String {
        let label = match self.category {
            Category::Visual => "Visual modification",
            Category::Style => "Style adjustment",
            Category::Audio => "Audio modification",
            Category::Narrative => "Narrative suggestion",
            Category::General => "General enhancement",
        };
        format!("{}: {}", label, self.span)
    }

    /// Short instruction derived from the comment text for this category.
    pub fn prompt_fragment(&self, lowered: &str, max_visual_terms: usize) -> String {
        match self.category {
            Category::Visual => visual_fragment(lowered, max_visual_terms),
            Category::Style => style_fragment(lowered),
            Category::Audio => audio_fragment(lowered),
            Category::Narrative => match &self.directive {
                Some(directive) => format!("with a story where {}", directive.trim()),
                None => "develop the story".to_string(),
            },
            Category::General => general_fragment(&harvest_terms(lowered)),
        }
    }
}

fn visual_fragment(lowered: &str, max_terms: usize) -> String {
    let terms = harvest_terms(lowered);
    if terms.is_empty() {
        return "enhance visual elements".to_string();
    }
    let shown: Vec<&str> = terms.into_iter().take(max_terms).collect();
    format!("add {}", shown.join(", "))
}

fn style_fragment(lowered: &str) -> String {
    if let Some(style) = KeywordGroup::Styles
        .terms()
        .iter()
        .find(|style| lowered.contains(**style))
    {
        return format!("in {} style", style);
    }
    if let Some(descriptor) = STYLE_DESCRIPTORS
        .iter()
        .find(|descriptor| lowered.contains(**descriptor))
    {
        return format!("make it {}", descriptor);
    }
    "adjust the visual style".to_string()
}

fn audio_fragment(lowered: &str) -> String {
    AUDIO_TERMS
        .iter()
        .find(|term| lowered.contains(**term))
        .map(|term| format!("adjust audio to be {}", term))
        .unwrap_or_else(|| "modify the audio".to_string())
}

pub(crate) fn general_fragment(terms: &[&str]) -> String {
    format!("incorporating {}", terms.join(", "))
}
