//! Trait abstractions for the currency service

use async_trait::async_trait;

use super::types::RateTable;
use crate::errors::DomainError;

/// Source of exchange rates
///
/// The production implementation calls the remote rate endpoint; tests
/// substitute a canned table.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the current rate table
    async fn fetch_rates(&self) -> Result<RateTable, DomainError>;
}
