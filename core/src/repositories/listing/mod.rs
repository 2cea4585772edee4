//! Listing repository module.

mod r#trait;
pub use r#trait::{ListingBatch, ListingRepository};

mod mock;
pub use mock::MockListingRepository;
