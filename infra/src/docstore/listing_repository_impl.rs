//! Document store implementation of the ListingRepository trait.

use async_trait::async_trait;
use std::sync::Arc;

use rn_core::domain::entities::listing::Listing;
use rn_core::errors::DomainError;
use rn_core::repositories::listing::{ListingBatch, ListingRepository};

use super::{decode_documents, DocStoreClient};

/// Name of the listings collection
pub(crate) const LISTINGS: &str = "listings";

/// Listing repository backed by the remote document store
pub struct DocStoreListingRepository {
    client: Arc<DocStoreClient>,
}

impl DocStoreListingRepository {
    /// Create a new repository over the given client
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }

    async fn fetch_batch(&self) -> Result<(Vec<Listing>, usize), DomainError> {
        let documents = self.client.list_documents(LISTINGS).await.map_err(DomainError::from)?;
        Ok(decode_documents::<Listing>(LISTINGS, documents))
    }
}

#[async_trait]
impl ListingRepository for DocStoreListingRepository {
    async fn fetch_all(&self) -> Result<ListingBatch, DomainError> {
        let (listings, skipped) = self.fetch_batch().await?;
        Ok(ListingBatch::new(listings).with_skipped(skipped))
    }

    async fn fetch_for_landlord(&self, landlord_id: &str) -> Result<ListingBatch, DomainError> {
        // The store has no server-side queries; ownership is filtered
        // after the fetch
        let (listings, skipped) = self.fetch_batch().await?;
        let owned = listings
            .into_iter()
            .filter(|listing| listing.is_owned_by(landlord_id))
            .collect();
        Ok(ListingBatch::new(owned).with_skipped(skipped))
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Listing>, DomainError> {
        let document = self
            .client
            .get_document(LISTINGS, id)
            .await
            .map_err(DomainError::from)?;

        match document {
            Some(value) => match serde_json::from_value::<Listing>(value) {
                Ok(listing) => Ok(Some(listing)),
                Err(error) => {
                    tracing::debug!(
                        listing_id = id,
                        error = %error,
                        "Listing document no longer decodes"
                    );
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let document = serde_json::to_value(&listing).map_err(|e| DomainError::Internal {
            message: e.to_string(),
        })?;
        self.client
            .put_document(LISTINGS, &listing.id, &document)
            .await
            .map_err(DomainError::from)?;
        Ok(listing)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        if self
            .client
            .get_document(LISTINGS, &listing.id)
            .await
            .map_err(DomainError::from)?
            .is_none()
        {
            return Err(DomainError::NotFound {
                resource: "Listing".to_string(),
            });
        }

        let document = serde_json::to_value(&listing).map_err(|e| DomainError::Internal {
            message: e.to_string(),
        })?;
        self.client
            .put_document(LISTINGS, &listing.id, &document)
            .await
            .map_err(DomainError::from)?;
        Ok(listing)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        self.client
            .delete_document(LISTINGS, id)
            .await
            .map_err(DomainError::from)
    }
}
