//! HTTP exchange-rate provider.
//!
//! Calls the configured rate endpoint once per request and decodes the
//! `{"rates": {"<code>": <rate>}}` payload. Rates are quoted against the
//! configured base currency.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use rn_core::errors::{DomainError, NetworkError};
use rn_core::services::currency::{RateProvider, RateTable};
use rn_shared::config::currency::CurrencyConfig;

use crate::InfrastructureError;

/// Wire shape of the rate endpoint payload
#[derive(Debug, Deserialize)]
pub(crate) struct RatesPayload {
    pub(crate) rates: HashMap<String, f64>,
}

/// Rate provider backed by the remote rate endpoint
pub struct HttpRateProvider {
    http: reqwest::Client,
    config: CurrencyConfig,
}

impl HttpRateProvider {
    /// Create a new provider from configuration
    pub fn new(config: CurrencyConfig) -> Result<Self, InfrastructureError> {
        if config.rates_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Rate endpoint URL is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub(crate) fn decode_payload(
        base: &str,
        payload: RatesPayload,
    ) -> RateTable {
        RateTable::new(base, payload.rates)
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch_rates(&self) -> Result<RateTable, DomainError> {
        debug!(url = %self.config.rates_url, "Fetching exchange rates");

        let response = self
            .http
            .get(&self.config.rates_url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Rate endpoint request failed");
                if e.is_timeout() {
                    DomainError::Network(NetworkError::Timeout)
                } else {
                    DomainError::Network(NetworkError::RequestFailed {
                        message: e.to_string(),
                    })
                }
            })?;

        if !response.status().is_success() {
            return Err(DomainError::Network(NetworkError::ServiceUnavailable));
        }

        let payload: RatesPayload = response.json().await.map_err(|e| {
            DomainError::Network(NetworkError::DecodeFailed {
                resource: format!("rate table: {}", e),
            })
        })?;

        Ok(Self::decode_payload(&self.config.base_code, payload))
    }
}

#[cfg(test)]
pub(crate) fn parse_payload(raw: &str) -> Result<RatesPayload, serde_json::Error> {
    serde_json::from_str(raw)
}
