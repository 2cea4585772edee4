//! Listing service module
//!
//! This module provides the listing retrieval and search pipeline:
//! - Fetching the listing collection with a stale-response guard
//! - Radius filtering around a search center
//! - Price, bedroom, bathroom, and amenity filtering
//! - Annotation with favorites, review aggregates, and display prices
//! - Listing creation, update, and deletion for landlords

mod config;
mod filters;
mod generation;
pub mod geo;
pub mod radius;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::ListingServiceConfig;
pub use generation::FetchGeneration;
pub use service::ListingService;
pub use types::{AnnotatedListing, RefreshOutcome};
