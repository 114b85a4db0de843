//! Publish error types.

/// Failure to publish content to the external platform.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", message, line, file)]
pub struct PublishError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use erewhon_error::PublishError;
    ///
    /// let err = PublishError::new("Upload rejected");
    /// assert!(format!("{}", err).contains("Upload rejected"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
