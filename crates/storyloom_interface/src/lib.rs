//! Trait definitions for narrative generation providers.
//!
//! Provider polymorphism is a plain trait with two implementations (mock and
//! Groq-backed live), selected by a factory from process configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use storyloom_core::Scene;
use storyloom_error::StoryloomResult;

/// Contract every narrative generation provider must satisfy.
///
/// Both operations suspend until the backend responds or fails. A failed
/// call never produces a partial scene; callers keep their last good state
/// and offer an explicit manual retry. No provider retries automatically.
///
/// Shared semantics, regardless of provider:
///
/// - The 1-based position of the scene about to be generated is
///   `history.len() + 1`. When that position reaches 3 the scene is forced
///   to be an ending with no choices, whatever the backend returned.
///   Backend-declared endings before scene 3 pass through unsuppressed.
/// - `choice_id` is resolved against the last history scene's choices; when
///   it matches no offered id it is taken verbatim as the user's free-text
///   action.
/// - `elapsed_seconds` below 3 hints an impulsive reaction, above 8 a
///   hesitant one; anything else adds no hint.
#[async_trait]
pub trait Storyteller: Send + Sync {
    /// Generate the opening scene of a story from a premise and genre.
    ///
    /// Callers validate that `prompt` is non-empty and supply a concrete
    /// genre before this is invoked.
    async fn generate_start(&self, prompt: &str, genre: &str) -> StoryloomResult<Scene>;

    /// Generate the continuation scene following a committed choice.
    ///
    /// `history` is the canonical scene path so far and must be non-empty;
    /// its last element is the scene the choice was made against.
    async fn generate_next_scene(
        &self,
        history: &[Scene],
        choice_id: &str,
        elapsed_seconds: Option<f64>,
    ) -> StoryloomResult<Scene>;

    /// Provider name (e.g., "groq", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier backing this provider.
    fn model_name(&self) -> &str;
}
