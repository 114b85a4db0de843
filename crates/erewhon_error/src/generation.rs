//! Content generation error types.

/// Specific error conditions for content synthesis and revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Synthesis was requested without any topic to draw on
    #[display("No inspiration topics supplied")]
    NoInspiration,
    /// The generative backend failed
    #[display("Synthesis failed: {}", _0)]
    SynthesisFailed(String),
    /// Applying comment suggestions to existing content failed
    #[display("Modification of content '{}' failed: {}", content_id, reason)]
    ModificationFailed {
        /// Content being revised
        content_id: String,
        /// Reason for failure
        reason: String,
    },
}

/// Error type for generation operations.
///
/// # Examples
///
/// ```
/// use erewhon_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::NoInspiration);
/// assert!(format!("{}", err).contains("inspiration"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
