//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the RentNest
//! application, following Clean Architecture principles. It provides
//! concrete implementations for the remote document store and the
//! exchange-rate endpoint.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Docstore**: JSON document store client and repository implementations
//! - **Rates**: HTTP exchange-rate provider for currency conversion

// Re-export core error types for convenience
pub use rn_core::errors::*;

/// Document store module - remote collections over HTTPS
pub mod docstore;

/// Exchange-rate module - remote rate endpoint client
pub mod rates;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles:
    //! - Document store connection settings
    //! - Rate endpoint settings
    //! - Environment-specific settings

    use serde::{Deserialize, Serialize};

    // Re-export shared configs for convenience
    pub use rn_shared::config::{currency::CurrencyConfig, docstore::DocStoreConfig};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Document store configuration
        pub docstore: DocStoreConfig,
        /// Exchange-rate endpoint configuration
        pub currency: CurrencyConfig,
    }
}

use std::sync::Arc;

use docstore::{
    DocStoreClient, DocStoreListingRepository, DocStoreReviewRepository, DocStoreUserRepository,
};
use rates::HttpRateProvider;

/// Concrete backends wired for the services in `rn_core`
pub struct Backends {
    pub listings: Arc<DocStoreListingRepository>,
    pub users: Arc<DocStoreUserRepository>,
    pub reviews: Arc<DocStoreReviewRepository>,
    pub rates: Arc<HttpRateProvider>,
}

/// Load infrastructure configuration from environment
pub fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    Ok(config::InfrastructureConfig {
        docstore: config::DocStoreConfig::from_env(),
        currency: config::CurrencyConfig::from_env(),
    })
}

/// Build the production backends from configuration
pub fn connect(config: &config::InfrastructureConfig) -> Result<Backends, InfrastructureError> {
    tracing::info!(
        docstore = %config.docstore.trimmed_base_url(),
        "Connecting infrastructure backends"
    );

    let client = Arc::new(DocStoreClient::new(config.docstore.clone())?);

    Ok(Backends {
        listings: Arc::new(DocStoreListingRepository::new(client.clone())),
        users: Arc::new(DocStoreUserRepository::new(client.clone())),
        reviews: Arc::new(DocStoreReviewRepository::new(client)),
        rates: Arc::new(HttpRateProvider::new(config.currency.clone())?),
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload decoding error
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Remote service returned a failure status
    #[error("Remote service error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Http(e) => {
                if e.is_timeout() {
                    DomainError::Network(NetworkError::Timeout)
                } else {
                    DomainError::Network(NetworkError::RequestFailed {
                        message: e.to_string(),
                    })
                }
            }
            InfrastructureError::Decode(e) => DomainError::Network(NetworkError::DecodeFailed {
                resource: e.to_string(),
            }),
            InfrastructureError::Api { status, message } => {
                if status >= 500 {
                    DomainError::Network(NetworkError::ServiceUnavailable)
                } else {
                    DomainError::Network(NetworkError::RequestFailed {
                        message: format!("status {}: {}", status, message),
                    })
                }
            }
            InfrastructureError::Config(message) => DomainError::Internal { message },
            InfrastructureError::General(message) => DomainError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_by_status() {
        let unavailable: DomainError = InfrastructureError::Api {
            status: 503,
            message: "maintenance".to_string(),
        }
        .into();
        assert!(matches!(
            unavailable,
            DomainError::Network(NetworkError::ServiceUnavailable)
        ));

        let rejected: DomainError = InfrastructureError::Api {
            status: 404,
            message: "missing".to_string(),
        }
        .into();
        assert!(matches!(
            rejected,
            DomainError::Network(NetworkError::RequestFailed { .. })
        ));
    }

    #[test]
    fn test_config_error_maps_to_internal() {
        let err: DomainError =
            InfrastructureError::Config("DOCSTORE_BASE_URL not set".to_string()).into();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
