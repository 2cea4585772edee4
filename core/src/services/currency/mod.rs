//! Currency conversion service module
//!
//! Converts stored base-currency prices into the user's display currency
//! using a rate table fetched once per session from the remote rate
//! endpoint.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::{CurrencyService, NOT_AVAILABLE};
pub use traits::RateProvider;
pub use types::RateTable;
