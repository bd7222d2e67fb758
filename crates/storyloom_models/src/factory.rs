//! Provider selection from process configuration.

use crate::{DEFAULT_GROQ_MODEL, GroqStoryteller, MockStoryteller};
use std::sync::Arc;
use storyloom_interface::Storyteller;
use tracing::{info, instrument};

/// Configuration for provider selection, resolved from the environment.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Credential for the live provider, if present
    pub api_key: Option<String>,
    /// Model override for the live provider
    pub model: Option<String>,
    /// Forces the mock provider regardless of credential presence
    pub force_mock: bool,
}

impl ProviderConfig {
    /// Resolve provider configuration from environment variables.
    ///
    /// Reads:
    /// - `GROQ_API_KEY` (optional credential)
    /// - `GROQ_MODEL` (optional model override)
    /// - `USE_MOCK_AI` (the exact string "true" forces the mock)
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("GROQ_MODEL").ok().filter(|m| !m.is_empty()),
            force_mock: std::env::var("USE_MOCK_AI").as_deref() == Ok("true"),
        }
    }

    /// The live model this configuration resolves to.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_GROQ_MODEL)
    }
}

/// Select a storyteller for this configuration.
///
/// The mock is used when the override flag is set or no credential is
/// configured; otherwise the Groq-backed live provider.
#[instrument(skip(config), fields(force_mock = config.force_mock, has_key = config.api_key.is_some()))]
pub fn create_storyteller(config: &ProviderConfig) -> Arc<dyn Storyteller> {
    match &config.api_key {
        Some(api_key) if !config.force_mock => {
            let model = config.model().to_string();
            info!(model = %model, "Using Groq storyteller");
            Arc::new(GroqStoryteller::with_api_key(api_key.clone(), model))
        }
        _ => {
            info!("Using mock storyteller");
            Arc::new(MockStoryteller::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_routes_to_mock() {
        let config = ProviderConfig::default();
        let storyteller = create_storyteller(&config);
        assert_eq!(storyteller.provider_name(), "mock");
    }

    #[test]
    fn mock_override_wins_over_credential() {
        let config = ProviderConfig {
            api_key: Some("gsk_test".to_string()),
            model: None,
            force_mock: true,
        };
        let storyteller = create_storyteller(&config);
        assert_eq!(storyteller.provider_name(), "mock");
    }

    #[test]
    fn credential_selects_groq() {
        let config = ProviderConfig {
            api_key: Some("gsk_test".to_string()),
            model: None,
            force_mock: false,
        };
        let storyteller = create_storyteller(&config);
        assert_eq!(storyteller.provider_name(), "groq");
        assert_eq!(storyteller.model_name(), DEFAULT_GROQ_MODEL);
    }

    #[test]
    fn model_override_is_respected() {
        let config = ProviderConfig {
            api_key: Some("gsk_test".to_string()),
            model: Some("llama-3.3-70b-versatile".to_string()),
            force_mock: false,
        };
        assert_eq!(config.model(), "llama-3.3-70b-versatile");
    }
}
