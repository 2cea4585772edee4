//! Currency service implementation

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing;

use crate::domain::entities::currency::{catalog, CurrencyOption};
use crate::errors::{DomainError, DomainResult};
use rn_shared::utils::money;

use super::traits::RateProvider;
use super::types::RateTable;

/// Sentinel shown when a stored price cannot be converted
pub const NOT_AVAILABLE: &str = "N/A";

/// Currency conversion service
///
/// The rate table is fetched on first use and cached for the rest of the
/// session; `refresh_rates` forces a refetch.
pub struct CurrencyService<P: RateProvider> {
    /// Rate source
    provider: Arc<P>,
    /// Session-scoped rate cache
    cache: RwLock<Option<RateTable>>,
}

impl<P: RateProvider> CurrencyService<P> {
    /// Create a new currency service
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            cache: RwLock::new(None),
        }
    }

    /// Current rate table, fetching it on first use
    pub async fn rates(&self) -> DomainResult<RateTable> {
        if let Some(table) = self.cache.read().await.as_ref() {
            return Ok(table.clone());
        }

        let mut cache = self.cache.write().await;
        // Another caller may have filled the cache while we waited
        if let Some(table) = cache.as_ref() {
            return Ok(table.clone());
        }

        let table = self.provider.fetch_rates().await?;
        tracing::info!(
            base = %table.base,
            currencies = table.rates.len(),
            event = "rates_fetched",
            "Fetched exchange rate table"
        );
        *cache = Some(table.clone());
        Ok(table)
    }

    /// Discard the cached table and fetch a fresh one
    pub async fn refresh_rates(&self) -> DomainResult<RateTable> {
        let table = self.provider.fetch_rates().await?;
        let mut cache = self.cache.write().await;
        *cache = Some(table.clone());
        Ok(table)
    }

    /// Catalog entry for a currency code, annotated with its live rate
    pub async fn option_for(&self, code: &str) -> DomainResult<CurrencyOption> {
        let option = catalog()
            .into_iter()
            .find(|o| o.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Currency {}", code),
            })?;

        let table = self.rates().await?;
        let rate = table.rate_for(&option.code).unwrap_or_else(|| {
            tracing::warn!(code = %option.code, "Rate table has no entry for currency, using 1.0");
            1.0
        });
        Ok(option.with_rate(rate))
    }

    /// Full catalog annotated with live rates
    pub async fn options(&self) -> DomainResult<Vec<CurrencyOption>> {
        let table = self.rates().await?;
        Ok(catalog()
            .into_iter()
            .map(|option| {
                let rate = table.rate_for(&option.code).unwrap_or(1.0);
                option.with_rate(rate)
            })
            .collect())
    }

    /// Convert a base-currency amount into the given display currency
    pub async fn convert(&self, amount: f64, code: &str) -> DomainResult<f64> {
        let option = self.option_for(code).await?;
        Ok(amount * option.rate)
    }

    /// Render a stored price string in the given display currency
    ///
    /// Non-numeric stored prices render as the `"N/A"` sentinel.
    pub async fn display_price(&self, base_price: &str, code: &str) -> DomainResult<String> {
        let option = self.option_for(code).await?;
        Ok(Self::display_price_with(&option, base_price))
    }

    /// Render a stored price using an already-annotated currency option
    pub fn display_price_with(option: &CurrencyOption, base_price: &str) -> String {
        match money::parse_price(base_price) {
            Some(amount) => option.format_amount(amount * option.rate),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}
