//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, TransportError, ValidationError};

/// The foundation error enum for the Storyloom workspace.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomError, TransportError};
///
/// let transport = TransportError::new("request timed out");
/// let err: StoryloomError = transport.into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryloomErrorKind {
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Scene generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Network/service failure reaching the model
    #[from(TransportError)]
    Transport(TransportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Storyloom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomResult, ConfigError};
///
/// fn might_fail() -> StoryloomResult<()> {
///     Err(ConfigError::new("missing bind address"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyloom Error: {}", _0)]
pub struct StoryloomError(Box<StoryloomErrorKind>);

impl StoryloomError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryloomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryloomErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryloomErrorKind
impl<T> From<T> for StoryloomError
where
    T: Into<StoryloomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyloom operations.
pub type StoryloomResult<T> = std::result::Result<T, StoryloomError>;
