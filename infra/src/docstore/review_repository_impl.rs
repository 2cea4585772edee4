//! Document store implementation of the ReviewRepository trait.
//!
//! Reviews live in a `reviews` sub-collection under each listing
//! document and are loaded all at once.

use async_trait::async_trait;
use std::sync::Arc;

use rn_core::domain::entities::review::Review;
use rn_core::errors::DomainError;
use rn_core::repositories::review::{ReviewBatch, ReviewRepository};

use super::listing_repository_impl::LISTINGS;
use super::{decode_documents, DocStoreClient};

/// Name of the per-listing reviews sub-collection
pub(crate) const REVIEWS: &str = "reviews";

/// Review repository backed by the remote document store
pub struct DocStoreReviewRepository {
    client: Arc<DocStoreClient>,
}

impl DocStoreReviewRepository {
    /// Create a new repository over the given client
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewRepository for DocStoreReviewRepository {
    async fn fetch_for_listing(&self, listing_id: &str) -> Result<ReviewBatch, DomainError> {
        let documents = self
            .client
            .list_subcollection(LISTINGS, listing_id, REVIEWS)
            .await
            .map_err(DomainError::from)?;

        let (reviews, skipped) = decode_documents::<Review>(REVIEWS, documents);
        Ok(ReviewBatch::new(reviews).with_skipped(skipped))
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let document = serde_json::to_value(&review).map_err(|e| DomainError::Internal {
            message: e.to_string(),
        })?;
        self.client
            .put_subdocument(LISTINGS, &review.listing_id, REVIEWS, &review.id, &document)
            .await
            .map_err(DomainError::from)?;
        Ok(review)
    }
}
