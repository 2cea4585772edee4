//! Listing repository trait defining the interface for listing persistence.
//!
//! Implementations talk to the remote document store. Documents are
//! schemaless, so a fetch can encounter records that no longer decode;
//! those are skipped and counted rather than failing the whole read.

use async_trait::async_trait;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

/// Result of a multi-document fetch
///
/// `skipped` counts documents that failed to decode and were dropped.
#[derive(Debug, Clone, Default)]
pub struct ListingBatch {
    pub listings: Vec<Listing>,
    pub skipped: usize,
}

impl ListingBatch {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            skipped: 0,
        }
    }

    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Repository contract for listing documents
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Fetch every listing document in the collection
    ///
    /// # Returns
    /// * `Ok(ListingBatch)` - decoded listings plus the skip count
    /// * `Err(DomainError)` - transport failure
    async fn fetch_all(&self) -> Result<ListingBatch, DomainError>;

    /// Fetch the listings owned by a landlord
    async fn fetch_for_landlord(&self, landlord_id: &str) -> Result<ListingBatch, DomainError>;

    /// Fetch a single listing by id
    ///
    /// # Returns
    /// * `Ok(Some(Listing))` - listing found
    /// * `Ok(None)` - no listing with that id, or its document no longer decodes
    /// * `Err(DomainError)` - transport failure
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Listing>, DomainError>;

    /// Persist a new listing document
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Replace an existing listing document
    async fn update(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Delete a listing document
    ///
    /// # Returns
    /// * `Ok(true)` - listing was deleted
    /// * `Ok(false)` - listing not found
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
