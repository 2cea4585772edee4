//! Currency conversion configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Settings for the remote exchange-rate endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConfig {
    /// URL of the rate endpoint returning `{"rates": {"<code>": <rate>}}`
    pub rates_url: String,

    /// Currency code all stored prices are expressed in
    #[serde(default = "default_base_code")]
    pub base_code: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            rates_url: String::from("https://open.er-api.com/v6/latest/CAD"),
            base_code: default_base_code(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl CurrencyConfig {
    /// Create a configuration for the given rate endpoint
    pub fn new(rates_url: impl Into<String>) -> Self {
        Self {
            rates_url: rates_url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rates_url: env::var("CURRENCY_RATES_URL").unwrap_or(defaults.rates_url),
            base_code: env::var("CURRENCY_BASE_CODE").unwrap_or(defaults.base_code),
            request_timeout_secs: env::var("CURRENCY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

fn default_base_code() -> String {
    String::from("CAD")
}

fn default_timeout_secs() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CurrencyConfig::default();
        assert_eq!(config.base_code, "CAD");
        assert!(config.rates_url.starts_with("https://"));
        assert_eq!(config.request_timeout_secs, 15);
    }
}
