//! Narrative generation error types.

/// Specific error conditions for scene generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Model returned no message content at all
    #[display("Model returned an empty response")]
    EmptyResponse,
    /// Model reply did not contain a recognizable JSON scene
    #[display("No JSON scene found in model reply: {}", _0)]
    NoJsonFound(String),
    /// Scene JSON failed to deserialize
    #[display("Failed to parse scene reply: {}", _0)]
    UnparsableReply(String),
    /// Scene JSON parsed but a required field was missing
    #[display("Scene reply missing required field: {}", _0)]
    MissingField(String),
}

/// Error type for scene generation failures.
///
/// Generation failures are surfaced to the caller and never retried
/// automatically by the service itself; the caller keeps its last good
/// state and offers a manual retry.
///
/// # Examples
///
/// ```
/// use storyloom_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty response"));
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
