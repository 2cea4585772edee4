//! Mock implementation of ListingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::listing::Listing;
use crate::errors::{DomainError, NetworkError};

use super::r#trait::{ListingBatch, ListingRepository};

/// Mock listing repository for testing
///
/// Supports simulating decode skips, transport failures, and slow
/// responses so callers can exercise their degradation paths.
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<String, Listing>>>,
    skipped: usize,
    fail: bool,
    delay: Option<Duration>,
}

impl MockListingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
            skipped: 0,
            fail: false,
            delay: None,
        }
    }

    /// Seed the repository with listings
    pub async fn seed(&self, listings: Vec<Listing>) {
        let mut guard = self.listings.write().await;
        for listing in listings {
            guard.insert(listing.id.clone(), listing);
        }
    }

    /// Report this many skipped documents on every fetch
    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    /// Fail every call with a transport error
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Delay every fetch, for interleaving tests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn simulate_transport(&self) -> Result<(), DomainError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(DomainError::Network(NetworkError::ServiceUnavailable));
        }
        Ok(())
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn fetch_all(&self) -> Result<ListingBatch, DomainError> {
        self.simulate_transport().await?;
        let listings = self.listings.read().await;
        Ok(ListingBatch::new(listings.values().cloned().collect()).with_skipped(self.skipped))
    }

    async fn fetch_for_landlord(&self, landlord_id: &str) -> Result<ListingBatch, DomainError> {
        self.simulate_transport().await?;
        let listings = self.listings.read().await;
        let owned = listings
            .values()
            .filter(|l| l.is_owned_by(landlord_id))
            .cloned()
            .collect();
        Ok(ListingBatch::new(owned).with_skipped(self.skipped))
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Listing>, DomainError> {
        self.simulate_transport().await?;
        let listings = self.listings.read().await;
        Ok(listings.get(id).cloned())
    }

    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        self.simulate_transport().await?;
        let mut listings = self.listings.write().await;

        if listings.contains_key(&listing.id) {
            return Err(DomainError::Validation {
                message: "Listing already exists".to_string(),
            });
        }

        listings.insert(listing.id.clone(), listing.clone());
        Ok(listing)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        self.simulate_transport().await?;
        let mut listings = self.listings.write().await;

        if !listings.contains_key(&listing.id) {
            return Err(DomainError::NotFound {
                resource: "Listing".to_string(),
            });
        }

        listings.insert(listing.id.clone(), listing.clone());
        Ok(listing)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        self.simulate_transport().await?;
        let mut listings = self.listings.write().await;
        Ok(listings.remove(id).is_some())
    }
}
