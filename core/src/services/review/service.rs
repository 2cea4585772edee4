//! Review aggregation and submission service

use std::sync::Arc;
use tracing;

use crate::domain::entities::app_user::AppUser;
use crate::domain::entities::review::{Review, MAX_COMMENT_LENGTH, MAX_RATING, MIN_RATING};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::review::ReviewRepository;
use rn_shared::utils::validation::validators;
use serde::{Deserialize, Serialize};

/// Aggregate rating for one listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            count: 0,
        }
    }
}

/// Arithmetic mean of ratings; an empty set averages to zero
pub fn average_rating(reviews: &[Review]) -> f64 {
    let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    sum as f64 / reviews.len().max(1) as f64
}

/// Number of reviews
pub fn review_count(reviews: &[Review]) -> usize {
    reviews.len()
}

/// Review service for loading and submitting listing reviews
pub struct ReviewService<V: ReviewRepository> {
    /// Review document access
    reviews: Arc<V>,
}

impl<V: ReviewRepository> ReviewService<V> {
    /// Create a new review service
    pub fn new(reviews: Arc<V>) -> Self {
        Self { reviews }
    }

    /// All reviews for a listing, newest first
    pub async fn list_for_listing(&self, listing_id: &str) -> DomainResult<Vec<Review>> {
        let batch = self.reviews.fetch_for_listing(listing_id).await?;
        if batch.skipped > 0 {
            tracing::warn!(
                listing_id = listing_id,
                skipped = batch.skipped,
                "Skipped malformed review documents"
            );
        }
        let mut reviews = batch.reviews;
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    /// Aggregate rating for a listing
    pub async fn aggregate(&self, listing_id: &str) -> DomainResult<RatingSummary> {
        let batch = self.reviews.fetch_for_listing(listing_id).await?;
        if batch.skipped > 0 {
            tracing::warn!(
                listing_id = listing_id,
                skipped = batch.skipped,
                "Skipped malformed review documents"
            );
        }
        Ok(RatingSummary {
            average: average_rating(&batch.reviews),
            count: review_count(&batch.reviews),
        })
    }

    /// Submit a review on a listing
    ///
    /// Requires an authenticated author. Reviews are immutable once
    /// created.
    pub async fn submit(
        &self,
        author: Option<&AppUser>,
        listing_id: &str,
        rating: u8,
        comment: &str,
    ) -> DomainResult<Review> {
        let author = author.ok_or(AuthError::NotAuthenticated)?;

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::InvalidRating { rating }.into());
        }
        if !validators::length_between(comment, 1, MAX_COMMENT_LENGTH) {
            return Err(ValidationError::InvalidLength {
                field: "comment".to_string(),
                expected: MAX_COMMENT_LENGTH,
                actual: comment.trim().chars().count(),
            }
            .into());
        }

        let mut review = Review::new(
            listing_id,
            author.id.clone(),
            author.username.clone(),
            rating,
            comment.trim(),
        );
        if author.is_verified {
            review = review.from_verified_author();
        }

        let created = self.reviews.create(review).await?;
        tracing::info!(
            listing_id = listing_id,
            review_id = %created.id,
            rating = rating,
            event = "review_submitted",
            "Review submitted"
        );
        Ok(created)
    }
}
