//! Mock implementation of ReviewRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, NetworkError};

use super::r#trait::{ReviewBatch, ReviewRepository};

/// Mock review repository for testing
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<String, Vec<Review>>>>,
    skipped: usize,
    fail: bool,
}

impl MockReviewRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
            skipped: 0,
            fail: false,
        }
    }

    /// Seed the repository with reviews
    pub async fn seed(&self, reviews: Vec<Review>) {
        let mut guard = self.reviews.write().await;
        for review in reviews {
            guard
                .entry(review.listing_id.clone())
                .or_default()
                .push(review);
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
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn fetch_for_listing(&self, listing_id: &str) -> Result<ReviewBatch, DomainError> {
        if self.fail {
            return Err(DomainError::Network(NetworkError::ServiceUnavailable));
        }
        let reviews = self.reviews.read().await;
        let for_listing = reviews.get(listing_id).cloned().unwrap_or_default();
        Ok(ReviewBatch::new(for_listing).with_skipped(self.skipped))
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        if self.fail {
            return Err(DomainError::Network(NetworkError::ServiceUnavailable));
        }
        let mut reviews = self.reviews.write().await;
        reviews
            .entry(review.listing_id.clone())
            .or_default()
            .push(review.clone());
        Ok(review)
    }
}
