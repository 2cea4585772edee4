//! Example wiring the full search pipeline against live backends
//!
//! Run with: cargo run --example search_demo
//!
//! Expects DOCSTORE_BASE_URL (and optionally DOCSTORE_API_KEY,
//! CURRENCY_RATES_URL) in the environment or a .env file.

use std::sync::Arc;

use rn_core::domain::value_objects::search_filters::SearchFilters;
use rn_core::services::currency::CurrencyService;
use rn_core::services::listing::{ListingService, ListingServiceConfig, RefreshOutcome};
use rn_core::services::review::ReviewService;
use rn_shared::types::common::Coordinate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = rn_infra::load_config()?;
    let backends = rn_infra::connect(&config)?;

    let currency = Arc::new(CurrencyService::new(backends.rates.clone()));
    let reviews = Arc::new(ReviewService::new(backends.reviews.clone()));
    let listings = ListingService::new(
        backends.listings.clone(),
        currency,
        reviews,
        ListingServiceConfig::default(),
    );

    match listings.refresh().await? {
        RefreshOutcome::Completed { count, skipped } => {
            println!("Fetched {} listings ({} skipped)", count, skipped);
        }
        RefreshOutcome::Superseded => {
            println!("Refresh superseded");
            return Ok(());
        }
    }

    // Downtown Toronto, 10 km radius, capped at 1620 USD
    let filters = SearchFilters::default()
        .within(Coordinate::new(43.7, -79.4), 10.0)
        .with_max_price(1620.0, "USD");

    let results = listings.search(&filters, None).await?;
    println!("\n=== {} listings within 10 km ===", results.len());
    for hit in &results {
        println!(
            "{} | {} | {:.1} km | {:.1} stars ({} reviews)",
            hit.listing.title,
            hit.display_price,
            hit.distance_km.unwrap_or_default(),
            hit.average_rating,
            hit.review_count,
        );
    }

    Ok(())
}
