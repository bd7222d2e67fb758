//! Transport error types for the upstream model API.

/// Network or service failure reaching the model provider.
///
/// Callers treat this identically to a generation failure: last good state
/// is preserved and the user retries explicitly.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", message, line, file)]
pub struct TransportError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyloom_error::TransportError;
    ///
    /// let err = TransportError::new("connection refused");
    /// assert!(err.message.contains("refused"));
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
