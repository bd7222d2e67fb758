//! OpenAI-compatible chat completion wire types.

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Structured output mode (e.g., json_object)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a new message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// Requested reply format for structured output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResponseFormat {
    /// Format discriminator; "json_object" for structured replies
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// Request a JSON object reply.
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// OpenAI-compatible chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    pub id: String,
    /// Model used for the completion
    #[serde(default)]
    pub model: String,
    /// Generated completions
    pub choices: Vec<ChatChoice>,
    /// Token usage statistics
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Content of the first completion choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

/// A completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatChoice {
    /// Index of this choice
    #[serde(default)]
    pub index: u32,
    /// The generated message
    pub message: ChatMessage,
    /// Reason why generation finished
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens used
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_response_format_as_type() {
        let request = ChatCompletionRequest {
            model: "llama-3.1-8b-instant".to_string(),
            messages: vec![ChatMessage::user("hello")],
            temperature: Some(0.7),
            max_tokens: None,
            response_format: Some(ResponseFormat::json_object()),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn first_content_skips_blank_replies() {
        let response = ChatCompletionResponse {
            id: String::new(),
            model: String::new(),
            choices: vec![ChatChoice {
                index: 0,
                message: ChatMessage::new("assistant", "   "),
                finish_reason: None,
            }],
            usage: None,
        };
        assert!(response.first_content().is_none());
    }
}
