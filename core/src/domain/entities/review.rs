//! Review entity for per-listing ratings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest rating on the scale
pub const MIN_RATING: u8 = 1;

/// Highest rating on the scale
pub const MAX_RATING: u8 = 5;

/// Upper bound on comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// A rating left on a listing. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: String,

    /// Listing this review belongs to
    pub listing_id: String,

    /// Identifier of the author
    pub author_id: String,

    /// Author display name at submission time
    #[serde(default)]
    pub author_name: String,

    /// Rating on the 1-5 scale
    pub rating: u8,

    /// Free-form comment
    #[serde(default)]
    pub comment: String,

    /// Timestamp when the review was submitted
    pub created_at: DateTime<Utc>,

    /// Whether the author was identity-verified at submission time
    #[serde(default)]
    pub is_verified: bool,
}

impl Review {
    /// Creates a new Review instance
    pub fn new(
        listing_id: impl Into<String>,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            listing_id: listing_id.into(),
            author_id: author_id.into(),
            author_name: author_name.into(),
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
            is_verified: false,
        }
    }

    /// Mark the review as coming from a verified author
    pub fn from_verified_author(mut self) -> Self {
        self.is_verified = true;
        self
    }

    /// Check whether the given user wrote this review
    pub fn is_by(&self, author_id: &str) -> bool {
        self.author_id == author_id
    }
}
