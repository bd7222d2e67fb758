//! Groq AI LPU Inference API storyteller using the OpenAI-compatible client.

use crate::{
    ChatClient, FINAL_SCENE_POSITION, Sanitizer, continuation_prompt, opening_prompt,
    resolve_action, scene_from_reply,
};
use async_trait::async_trait;
use storyloom_core::Scene;
use storyloom_error::{ConfigError, StoryloomResult, ValidationError};
use storyloom_interface::Storyteller;
use tracing::{debug, instrument};

const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const START_TITLE_FALLBACK: &str = "The Adventure Begins";
const NEXT_TITLE_FALLBACK: &str = "The Next Chapter";

/// Live storyteller backed by the Groq chat completions API.
#[derive(Debug, Clone)]
pub struct GroqStoryteller {
    client: ChatClient,
    sanitizer: Sanitizer,
}

impl GroqStoryteller {
    /// Creates a new Groq storyteller.
    ///
    /// Reads the API token from the `GROQ_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API token is not set.
    #[instrument(skip_all, fields(model = %model))]
    pub fn new(model: String) -> StoryloomResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|e| ConfigError::new(format!("GROQ_API_KEY not set: {}", e)))?;

        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a new Groq storyteller with an explicit API key.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn with_api_key(api_key: String, model: String) -> Self {
        let client = ChatClient::new(api_key, model, GROQ_ENDPOINT.to_string(), "groq");
        Self {
            client,
            sanitizer: Sanitizer::new(),
        }
    }
}

#[async_trait]
impl Storyteller for GroqStoryteller {
    #[instrument(skip(self, prompt), fields(provider = "groq", model = %self.client.model_name(), genre = %genre))]
    async fn generate_start(&self, prompt: &str, genre: &str) -> StoryloomResult<Scene> {
        debug!("Generating opening scene");

        let payload = opening_prompt(prompt, genre);
        let request = self.client.narrative_request(payload);
        let reply = self.client.complete_text(&request).await?;

        scene_from_reply(&reply, &self.sanitizer, false, START_TITLE_FALLBACK)
    }

    #[instrument(
        skip(self, history, choice_id),
        fields(provider = "groq", model = %self.client.model_name(), scene_count = history.len() + 1)
    )]
    async fn generate_next_scene(
        &self,
        history: &[Scene],
        choice_id: &str,
        elapsed_seconds: Option<f64>,
    ) -> StoryloomResult<Scene> {
        let last_scene = history
            .last()
            .ok_or_else(|| ValidationError::new("history must not be empty"))?;

        let action = resolve_action(last_scene, choice_id);
        let position = history.len() + 1;
        debug!(position, action, "Generating continuation scene");

        let payload = continuation_prompt(history, action, position, elapsed_seconds);
        let request = self.client.narrative_request(payload);
        let reply = self.client.complete_text(&request).await?;

        // The >= 3 ending is a hard override, not a suggestion to the model.
        let force_ending = position >= FINAL_SCENE_POSITION;
        scene_from_reply(&reply, &self.sanitizer, force_ending, NEXT_TITLE_FALLBACK)
    }

    fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }

    fn model_name(&self) -> &str {
        self.client.model_name()
    }
}
