//! Review service module
//!
//! Aggregates the per-listing reviews sub-collection into an average
//! rating and count, and handles review submission.

mod service;

#[cfg(test)]
mod tests;

pub use service::{average_rating, review_count, RatingSummary, ReviewService};
