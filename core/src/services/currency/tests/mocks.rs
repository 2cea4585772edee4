//! Mock rate provider for currency service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{DomainError, NetworkError};
use crate::services::currency::{RateProvider, RateTable};

pub struct MockRateProvider {
    table: RateTable,
    fail: bool,
    pub fetch_count: AtomicUsize,
}

impl MockRateProvider {
    pub fn with_rates(pairs: &[(&str, f64)]) -> Self {
        let rates: HashMap<String, f64> = pairs
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect();
        Self {
            table: RateTable::new("CAD", rates),
            fail: false,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            table: RateTable::new("CAD", HashMap::new()),
            fail: true,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for MockRateProvider {
    async fn fetch_rates(&self) -> Result<RateTable, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Network(NetworkError::ServiceUnavailable));
        }
        Ok(self.table.clone())
    }
}
