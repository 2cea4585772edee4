//! # RentNest Core
//!
//! Core business logic and domain layer for the RentNest backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AppUser, CurrencyOption, Listing, NewListing, Review};
pub use domain::value_objects::SearchFilters;
pub use errors::{DomainError, DomainResult};
pub use services::{
    AnnotatedListing, CurrencyService, FavoritesService, ListingService, ProfileService,
    ReviewService,
};
