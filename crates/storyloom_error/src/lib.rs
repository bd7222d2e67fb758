//! Error types for the Storyloom narrative engine.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums define specific error conditions
//! - `*Error` structs wrap the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyloom_error::{StoryloomResult, ValidationError};
//!
//! fn check_prompt(prompt: &str) -> StoryloomResult<()> {
//!     if prompt.trim().is_empty() {
//!         Err(ValidationError::new("prompt is required"))?;
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_prompt("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod transport;
mod validation;

pub use config::ConfigError;
pub use error::{StoryloomError, StoryloomErrorKind, StoryloomResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use transport::TransportError;
pub use validation::ValidationError;
