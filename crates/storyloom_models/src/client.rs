//! Generic OpenAI-compatible chat completions client.

use crate::{ChatCompletionRequest, ChatCompletionResponse};
use storyloom_error::{GenerationError, GenerationErrorKind, StoryloomResult, TransportError};
use tracing::{debug, error, instrument};

/// HTTP client for OpenAI-compatible chat completion endpoints.
///
/// Groq exposes such an endpoint; any other compatible host works by
/// pointing `endpoint` elsewhere.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
}

impl ChatClient {
    /// Create a new client for the given endpoint.
    #[instrument(skip(api_key), fields(model = %model, endpoint = %endpoint))]
    pub fn new(
        api_key: String,
        model: String,
        endpoint: String,
        provider: &'static str,
    ) -> Self {
        debug!("Creating chat completions client");
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            endpoint,
            provider,
        }
    }

    /// Provider name this client targets.
    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Model identifier requests are sent with.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Send a chat completion request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when the request cannot be sent or the
    /// endpoint answers with a non-success status, and `GenerationError`
    /// when a success reply cannot be deserialized.
    #[instrument(skip(self, request), fields(provider = self.provider, model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> StoryloomResult<ChatCompletionResponse> {
        debug!("Sending chat completion request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach chat completions endpoint");
                TransportError::new(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat completions endpoint returned error");
            return Err(TransportError::new(format!("API error {}: {}", status, body)).into());
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse chat completion response");
            GenerationError::new(GenerationErrorKind::UnparsableReply(format!(
                "Failed to deserialize completion: {}",
                e
            )))
        })?;

        debug!("Chat completion successful");
        Ok(completion)
    }

    /// Send a request and return the first choice's message content.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` with `EmptyResponse` when the reply carries
    /// no usable content, in addition to the failure modes of
    /// [`chat_completion`](Self::chat_completion).
    #[instrument(skip(self, request), fields(provider = self.provider))]
    pub async fn complete_text(
        &self,
        request: &ChatCompletionRequest,
    ) -> StoryloomResult<String> {
        let completion = self.chat_completion(request).await?;

        let text = completion.first_content().ok_or_else(|| {
            error!("Model returned no message content");
            GenerationError::new(GenerationErrorKind::EmptyResponse)
        })?;

        Ok(text.to_string())
    }

    /// Build a completion request with this client's model and the standard
    /// narrative settings (json_object replies, temperature 0.7).
    pub fn narrative_request(&self, prompt: String) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![crate::ChatMessage::user(prompt)],
            temperature: Some(0.7),
            max_tokens: None,
            response_format: Some(crate::ResponseFormat::json_object()),
        }
    }
}
