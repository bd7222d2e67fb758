//! Server configuration resolved from the environment.

use storyloom_models::ProviderConfig;

/// Configuration for the API server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "0.0.0.0:3000")
    pub addr: String,
    /// Provider selection settings
    pub provider: ProviderConfig,
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `STORYLOOM_ADDR` (default: "0.0.0.0:3000")
    /// - provider settings per [`ProviderConfig::from_env`]
    pub fn from_env() -> Self {
        let addr =
            std::env::var("STORYLOOM_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        Self {
            addr,
            provider: ProviderConfig::from_env(),
        }
    }

    /// Override the bind address.
    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }
}
