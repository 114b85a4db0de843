//! Classification categories for comment suggestions.

use serde::{Deserialize, Serialize};

/// What part of a piece of content a suggestion targets.
///
/// # Examples
///
/// ```
/// use erewhon_core::Category;
/// use std::str::FromStr;
///
/// assert_eq!(Category::Visual.to_string(), "visual");
/// assert_eq!(Category::from_str("audio").unwrap(), Category::Audio);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Objects, colors, clothing and other on-screen elements
    Visual,
    /// Overall look and aesthetic
    Style,
    /// Music and sound
    Audio,
    /// Story and characters
    Narrative,
    /// Loose keyword mentions with no explicit directive
    General,
}
