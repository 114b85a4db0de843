//! Extraction of creative suggestions from free-text comments.
//!
//! The [`IntentExtractor`] is a small rule engine: a blocklist veto, then
//! ordered regex tables per [`Category`](erewhon_core::Category), then a
//! keyword-taxonomy harvest as a fallback. Every step is a pure function of the
//! comment text and the static tables in this crate, so the same batch always
//! yields the same categories, confidences and prompt fragments.
//!
//! # Example
//!
//! ```
//! use erewhon_core::{Category, CommentBuilder};
//! use erewhon_intent::IntentExtractor;
//!
//! let comment = CommentBuilder::default()
//!     .id("c1")
//!     .source_content_id("erewhon_video_1")
//!     .author("User7")
//!     .text("music should be louder")
//!     .build()
//!     .unwrap();
//!
//! let extractor = IntentExtractor::default();
//! let processed = extractor.extract(&[comment]);
//!
//! assert_eq!(processed.len(), 1);
//! assert_eq!(*processed[0].category(), Category::Audio);
//! assert_eq!(processed[0].prompt_fragment(), "adjust audio to be louder");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blocklist;
mod config;
mod extractor;
mod patterns;
mod taxonomy;

pub use blocklist::{BLOCKLIST, is_blocked};
pub use config::{ExtractorConfig, ExtractorConfigBuilder};
pub use extractor::IntentExtractor;
pub use patterns::{PatternMatch, match_category, tier_confidence};
pub use taxonomy::{KeywordGroup, TAXONOMY, harvest_terms};
