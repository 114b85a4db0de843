//! Acquisition error types for trend and comment sources.

/// Specific error conditions when pulling data from an external source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AcquisitionErrorKind {
    /// Trend source could not be reached
    #[display("Trend source unavailable: {}", _0)]
    TrendSourceUnavailable(String),
    /// Trend source answered but reported no topics
    #[display("Trend source returned no topics")]
    NoTopics,
    /// Comment source could not be reached
    #[display("Comment source unavailable for '{}': {}", published_id, reason)]
    CommentSourceUnavailable {
        /// Published identifier the comments were requested for
        published_id: String,
        /// Reason reported by the source
        reason: String,
    },
}

/// Error type for acquisition operations.
///
/// # Examples
///
/// ```
/// use erewhon_error::{AcquisitionError, AcquisitionErrorKind};
///
/// let err = AcquisitionError::new(AcquisitionErrorKind::NoTopics);
/// assert!(format!("{}", err).contains("no topics"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Acquisition Error: {} at line {} in {}", kind, line, file)]
pub struct AcquisitionError {
    /// The specific error condition
    pub kind: AcquisitionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AcquisitionError {
    /// Create a new AcquisitionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AcquisitionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
