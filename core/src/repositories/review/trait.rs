//! Review repository trait for the per-listing reviews sub-collection.

use async_trait::async_trait;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

/// Result of a reviews fetch
///
/// `skipped` counts documents that failed to decode and were dropped.
#[derive(Debug, Clone, Default)]
pub struct ReviewBatch {
    pub reviews: Vec<Review>,
    pub skipped: usize,
}

impl ReviewBatch {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            skipped: 0,
        }
    }

    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Repository contract for review documents
///
/// Reviews live in a sub-collection under each listing and are loaded all
/// at once; there is no pagination.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fetch every review for a listing
    async fn fetch_for_listing(&self, listing_id: &str) -> Result<ReviewBatch, DomainError>;

    /// Persist a new review document
    async fn create(&self, review: Review) -> Result<Review, DomainError>;
}
