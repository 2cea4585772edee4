//! Value objects carried between the client shell and the services.

pub mod search_filters;

pub use search_filters::{BathroomFilter, BedroomFilter, SearchFilters};
