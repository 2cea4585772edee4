//! Exchange-rate endpoint access.

mod client;

#[cfg(test)]
mod tests;

pub use client::HttpRateProvider;
