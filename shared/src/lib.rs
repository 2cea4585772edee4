//! Shared utilities and common types for the RentNest workspace
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types
//! - Error response structures
//! - Utility functions (validation, money handling)
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CurrencyConfig, DocStoreConfig, Environment, LoggingConfig};
pub use types::{Coordinate, ErrorResponse};
pub use utils::{money, validation};
