//! Repository interfaces for the remote document store.

pub mod listing;
pub mod review;
pub mod user;

pub use listing::{ListingBatch, ListingRepository, MockListingRepository};
pub use review::{MockReviewRepository, ReviewBatch, ReviewRepository};
pub use user::{MockUserRepository, UserRepository};
