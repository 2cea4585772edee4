//! Example demonstrating live currency conversion
//!
//! Run with: cargo run --example currency_demo

use std::sync::Arc;

use rn_core::services::currency::CurrencyService;
use rn_infra::rates::HttpRateProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = rn_infra::load_config()?;
    let provider = Arc::new(HttpRateProvider::new(config.currency)?);
    let service = CurrencyService::new(provider);

    println!("=== Currency options ===");
    for option in service.options().await? {
        println!("{} {} rate {:.4}", option.flag, option.code, option.rate);
    }

    let base_price = "1200";
    for code in ["CAD", "USD", "EUR", "INR"] {
        let display = service.display_price(base_price, code).await?;
        println!("{} in {}: {}", base_price, code, display);
    }

    Ok(())
}
