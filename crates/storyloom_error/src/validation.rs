//! Request validation error types.

/// Error for missing or malformed request fields.
///
/// Raised at the HTTP boundary before a provider ever runs; never retried.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// What was missing or malformed
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyloom_error::ValidationError;
    ///
    /// let err = ValidationError::new("history must not be empty");
    /// assert!(err.message.contains("history"));
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
