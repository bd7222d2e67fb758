//! Deterministic offline storyteller for tests and local development.

use crate::{FINAL_SCENE_POSITION, resolve_action};
use async_trait::async_trait;
use std::time::Duration;
use storyloom_core::{Choice, Scene};
use storyloom_error::{StoryloomResult, ValidationError};
use storyloom_interface::Storyteller;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Storyteller that fabricates scenes locally after a fixed artificial
/// delay, with no network dependency.
///
/// Ending logic mirrors the live provider: the scene at position 3 is
/// always an ending with no choices.
#[derive(Debug, Clone)]
pub struct MockStoryteller {
    delay: Duration,
}

impl Default for MockStoryteller {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStoryteller {
    /// Creates a mock with the standard artificial delay.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }

    /// Creates a mock with a custom delay; tests use `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Storyteller for MockStoryteller {
    #[instrument(skip(self, prompt), fields(provider = "mock", genre = %genre))]
    async fn generate_start(&self, prompt: &str, genre: &str) -> StoryloomResult<Scene> {
        debug!("Fabricating opening scene");
        tokio::time::sleep(self.delay).await;

        Ok(Scene {
            id: Uuid::new_v4().to_string(),
            title: "The Beginning".to_string(),
            content: format!(
                "(Mock) You find yourself in a {genre} world based on \"{prompt}\". \
                 The air shimmers with possibility."
            ),
            choices: vec![
                Choice::new("1", "Go left towards the dark forest"),
                Choice::new("2", "Enter the glowing portal"),
            ],
            is_ending: false,
            visual_prompt: Some(format!("establishing shot of a {genre} world")),
        })
    }

    #[instrument(skip(self, history, choice_id), fields(provider = "mock", scene_count = history.len() + 1))]
    async fn generate_next_scene(
        &self,
        history: &[Scene],
        choice_id: &str,
        _elapsed_seconds: Option<f64>,
    ) -> StoryloomResult<Scene> {
        tokio::time::sleep(self.delay).await;

        let last_scene = history
            .last()
            .ok_or_else(|| ValidationError::new("history must not be empty"))?;
        let action = resolve_action(last_scene, choice_id);

        let position = history.len() + 1;
        let is_ending = position >= FINAL_SCENE_POSITION;
        debug!(position, is_ending, "Fabricating continuation scene");

        let (title, content, choices) = if is_ending {
            (
                "The End".to_string(),
                format!(
                    "(Mock) The story reaches its conclusion. Your choice to \"{action}\" \
                     led you here. Fate is sealed."
                ),
                Vec::new(),
            )
        } else {
            (
                format!("Chapter {position}"),
                format!("(Mock) You chose to \"{action}\". The story continues..."),
                vec![
                    Choice::new("3", "Continue deeper"),
                    Choice::new("4", "Turn back"),
                ],
            )
        };

        Ok(Scene {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            choices,
            is_ending,
            visual_prompt: None,
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-storyteller"
    }
}
