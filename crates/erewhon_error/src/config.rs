//! Errors raised while loading or validating pipeline and extractor settings.

/// A rejected setting, with the location that rejected it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the setting
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Rejects a setting with a free-form reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use erewhon_error::ConfigError;
    ///
    /// let err = ConfigError::new("topics_per_scan must be at least 1");
    /// assert!(err.to_string().contains("topics_per_scan"));
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

    /// Rejects a score setting that falls outside `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use erewhon_error::ConfigError;
    ///
    /// let err = ConfigError::out_of_range("confidence_floor", 1.5);
    /// assert_eq!(err.message, "confidence_floor must be within [0, 1], got 1.5");
    /// ```
    #[track_caller]
    pub fn out_of_range(field: &str, value: f64) -> Self {
        Self::new(format!("{} must be within [0, 1], got {}", field, value))
    }
}
