//! Top-level error wrapper types.

use crate::{AcquisitionError, ClassificationError, ConfigError, GenerationError, PublishError};

/// Every failure the pipeline can surface.
///
/// # Examples
///
/// ```
/// use erewhon_error::{ErewhonError, PublishError};
///
/// let err: ErewhonError = PublishError::new("Upload rejected").into();
/// assert!(format!("{}", err).contains("Publish Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ErewhonErrorKind {
    /// Trend or comment source unavailable
    #[from(AcquisitionError)]
    Acquisition(AcquisitionError),
    /// Content synthesis or revision failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Publishing failed
    #[from(PublishError)]
    Publish(PublishError),
    /// A single comment could not be classified
    #[from(ClassificationError)]
    Classification(ClassificationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Erewhon error with kind discrimination.
///
/// # Examples
///
/// ```
/// use erewhon_error::{ConfigError, ErewhonResult};
///
/// fn might_fail() -> ErewhonResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Erewhon Error: {}", _0)]
pub struct ErewhonError(Box<ErewhonErrorKind>);

impl ErewhonError {
    /// Create a new error from a kind.
    pub fn new(kind: ErewhonErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ErewhonErrorKind {
        &self.0
    }

    /// True for failures scoped to a single comment, which are skipped
    /// rather than surfaced to the orchestrator.
    pub fn is_per_item(&self) -> bool {
        matches!(self.kind(), ErewhonErrorKind::Classification(_))
    }
}

// Generic From implementation for any type that converts to ErewhonErrorKind
impl<T> From<T> for ErewhonError
where
    T: Into<ErewhonErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Erewhon operations.
pub type ErewhonResult<T> = std::result::Result<T, ErewhonError>;
