//! Listing service tests
