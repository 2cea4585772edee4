//! Stale-response guard for listing fetches.
//!
//! Fetches are single-shot requests with no cancellation, so a superseded
//! fetch's response can arrive after a newer one. Each fetch takes a
//! ticket from a monotonic counter; a response is applied only while its
//! ticket is still the latest.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter for in-flight fetches
#[derive(Debug, Default)]
pub struct FetchGeneration {
    counter: AtomicU64,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating all earlier tickets
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Check whether a ticket is still the latest
    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        let second = generation.begin();
        assert!(second > first);
    }

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
