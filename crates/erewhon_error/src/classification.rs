//! Comment classification error types.

/// Specific error conditions for a single malformed comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClassificationErrorKind {
    /// Comment has no text to classify
    #[display("Comment '{}' has no text", _0)]
    MissingText(String),
}

/// Error raised while classifying one comment.
///
/// These never abort a batch: the extractor logs and skips the comment.
///
/// # Examples
///
/// ```
/// use erewhon_error::{ClassificationError, ClassificationErrorKind};
///
/// let err = ClassificationError::new(ClassificationErrorKind::MissingText("c1".into()));
/// assert!(format!("{}", err).contains("c1"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Classification Error: {} at line {} in {}", kind, line, file)]
pub struct ClassificationError {
    /// The specific error condition
    pub kind: ClassificationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ClassificationError {
    /// Create a new ClassificationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClassificationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
