//! Business services containing domain logic and use cases.

pub mod currency;
pub mod favorites;
pub mod listing;
pub mod profile;
pub mod review;

// Re-export commonly used types
pub use currency::{CurrencyService, RateProvider, RateTable, NOT_AVAILABLE};
pub use favorites::FavoritesService;
pub use listing::{
    AnnotatedListing, FetchGeneration, ListingService, ListingServiceConfig, RefreshOutcome,
};
pub use profile::ProfileService;
pub use review::{average_rating, review_count, RatingSummary, ReviewService};
