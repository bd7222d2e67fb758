//! Configuration error types.

/// Error for missing or invalid environment configuration.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyloom_error::ConfigError;
    ///
    /// let err = ConfigError::new("GROQ_API_KEY not set");
    /// assert!(err.message.contains("GROQ_API_KEY"));
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
