//! Result types for listing retrieval and search.

use serde::{Deserialize, Serialize};

use crate::domain::entities::listing::Listing;
use crate::services::review::RatingSummary;

/// Outcome of a listing refresh
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The fetch completed and the in-memory set was replaced
    Completed {
        /// Listings now held
        count: usize,
        /// Malformed documents dropped by the repository
        skipped: usize,
    },
    /// A newer refresh started while this one was in flight; its result
    /// was discarded
    Superseded,
}

/// A listing decorated for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedListing {
    pub listing: Listing,

    /// Whether the viewer starred this listing
    pub is_favorite: bool,

    /// Live review aggregate
    pub average_rating: f64,
    pub review_count: usize,

    /// Price rendered in the display currency
    pub display_price: String,

    /// Distance from the search center, when one was active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl AnnotatedListing {
    /// Aggregate in the shape used by rating badges
    pub fn rating_summary(&self) -> RatingSummary {
        RatingSummary {
            average: self.average_rating,
            count: self.review_count,
        }
    }
}
