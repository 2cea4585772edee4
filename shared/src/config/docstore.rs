//! Remote document store configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Connection settings for the remote document store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocStoreConfig {
    /// Base URL of the document store API
    pub base_url: String,

    /// Bearer key sent with every request, if the store requires one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DocStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8089"),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DocStoreConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Attach an API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("DOCSTORE_BASE_URL")
                .unwrap_or_else(|_| String::from("http://localhost:8089")),
            api_key: env::var("DOCSTORE_API_KEY").ok().filter(|k| !k.is_empty()),
            timeout_secs: env::var("DOCSTORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }

    /// Base URL without a trailing slash
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocStoreConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = DocStoreConfig::new("https://store.example.com/")
            .with_api_key("secret")
            .with_timeout(5);

        assert_eq!(config.trimmed_base_url(), "https://store.example.com");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
    }
}
