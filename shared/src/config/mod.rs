//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `currency` - Exchange-rate endpoint and display currency configuration
//! - `docstore` - Remote document store connection configuration
//! - `environment` - Environment detection and logging configuration

pub mod currency;
pub mod docstore;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use currency::CurrencyConfig;
pub use docstore::DocStoreConfig;
pub use environment::{Environment, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Document store configuration
    pub docstore: DocStoreConfig,

    /// Currency conversion configuration
    pub currency: CurrencyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            docstore: DocStoreConfig::default(),
            currency: CurrencyConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            docstore: DocStoreConfig::from_env(),
            currency: CurrencyConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert!(!config.docstore.base_url.is_empty());
        assert_eq!(config.currency.base_code, "CAD");
    }
}
