//! Keyword taxonomy used to harvest concrete terms from comments.

use serde::{Deserialize, Serialize};

/// Semantic group a taxonomy term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordGroup {
    /// Colors and brightness
    Colors,
    /// Things that can appear on screen
    Objects,
    /// Wearables
    Clothing,
    /// Places
    Settings,
    /// Moods
    Emotions,
    /// Aesthetic styles
    Styles,
}

/// The taxonomy, in scan order. Group order and term order within a group are
/// part of the extractor's output contract.
pub const TAXONOMY: &[(KeywordGroup, &[&str])] = &[
    (
        KeywordGroup::Colors,
        &[
            "red", "blue", "green", "purple", "gold", "silver", "neon", "bright", "dark",
        ],
    ),
    (
        KeywordGroup::Objects,
        &[
            "robot", "wolf", "dragon", "car", "building", "tree", "ocean", "mountain",
        ],
    ),
    (
        KeywordGroup::Clothing,
        &["bikini", "suit", "dress", "armor", "cape", "hat", "glasses"],
    ),
    (
        KeywordGroup::Settings,
        &[
            "beach",
            "city",
            "forest",
            "space",
            "underwater",
            "desert",
            "disco",
        ],
    ),
    (
        KeywordGroup::Emotions,
        &[
            "happy",
            "sad",
            "angry",
            "peaceful",
            "excited",
            "mysterious",
            "dramatic",
        ],
    ),
    (
        KeywordGroup::Styles,
        &[
            "cyberpunk",
            "vintage",
            "modern",
            "fantasy",
            "realistic",
            "cartoon",
            "abstract",
        ],
    ),
];

impl KeywordGroup {
    /// Terms belonging to this group.
    pub fn terms(self) -> &'static [&'static str] {
        TAXONOMY
            .iter()
            .find(|(group, _)| *group == self)
            .map(|(_, terms)| *terms)
            .unwrap_or(&[])
    }
}

/// Collects every taxonomy term that occurs literally in `lowered`,
/// de-duplicated, in taxonomy scan order.
///
/// # Examples
///
/// ```
/// use erewhon_intent::harvest_terms;
///
/// assert_eq!(harvest_terms("a neon dragon at the beach"), vec!["neon", "dragon", "beach"]);
/// assert!(harvest_terms("nice work").is_empty());
/// ```
pub fn harvest_terms(lowered: &str) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for (_, terms) in TAXONOMY {
        for &term in terms.iter() {
            if lowered.contains(term) && !found.contains(&term) {
                found.push(term);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_lookup() {
        assert_eq!(KeywordGroup::Styles.terms()[0], "cyberpunk");
        assert_eq!(KeywordGroup::Clothing.terms().len(), 7);
    }

    #[test]
    fn test_harvest_follows_group_order_not_text_order() {
        // "cape" (clothing) appears before "robot" (objects) in the text.
        assert_eq!(harvest_terms("a cape for the robot"), vec!["robot", "cape"]);
    }

    #[test]
    fn test_harvest_matches_substrings() {
        // "darker" contains "dark".
        assert_eq!(harvest_terms("darker please"), vec!["dark"]);
    }
}
