//! Search filter value objects.

use crate::domain::entities::currency::BASE_CURRENCY;
use rn_shared::types::common::Coordinate;
use serde::{Deserialize, Serialize};

/// Bedroom filter buckets offered by the search UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "count")]
pub enum BedroomFilter {
    /// No bedroom constraint
    Any,
    /// Exactly this many bedrooms
    Exact(u32),
    /// Three or more bedrooms
    ThreePlus,
}

impl BedroomFilter {
    pub fn matches(&self, bedrooms: u32) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exact(count) => bedrooms == *count,
            BedroomFilter::ThreePlus => bedrooms >= 3,
        }
    }
}

impl Default for BedroomFilter {
    fn default() -> Self {
        BedroomFilter::Any
    }
}

/// Bathroom filter buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "count")]
pub enum BathroomFilter {
    Any,
    Exact(u32),
}

impl BathroomFilter {
    pub fn matches(&self, bathrooms: u32) -> bool {
        match self {
            BathroomFilter::Any => true,
            BathroomFilter::Exact(count) => bathrooms == *count,
        }
    }
}

impl Default for BathroomFilter {
    fn default() -> Self {
        BathroomFilter::Any
    }
}

/// Filter set applied to a listing search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Upper price bound, expressed in the display currency
    #[serde(default)]
    pub max_display_price: Option<f64>,

    /// Currency code prices are displayed and compared in
    #[serde(default = "default_currency")]
    pub display_currency: String,

    /// Bedroom bucket
    #[serde(default)]
    pub bedrooms: BedroomFilter,

    /// Bathroom bucket
    #[serde(default)]
    pub bathrooms: BathroomFilter,

    /// Amenities a listing must all carry
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Search center; falls back to the viewer's saved location
    #[serde(default)]
    pub center: Option<Coordinate>,

    /// Radius in kilometers; zero or negative disables geo filtering
    #[serde(default)]
    pub radius_km: f64,

    /// Hide listings marked unavailable
    #[serde(default = "default_only_available")]
    pub only_available: bool,
}

fn default_currency() -> String {
    BASE_CURRENCY.to_string()
}

fn default_only_available() -> bool {
    true
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            max_display_price: None,
            display_currency: default_currency(),
            bedrooms: BedroomFilter::default(),
            bathrooms: BathroomFilter::default(),
            amenities: Vec::new(),
            center: None,
            radius_km: 0.0,
            only_available: default_only_available(),
        }
    }
}

impl SearchFilters {
    pub fn with_max_price(mut self, max: f64, currency: impl Into<String>) -> Self {
        self.max_display_price = Some(max);
        self.display_currency = currency.into();
        self
    }

    pub fn within(mut self, center: Coordinate, radius_km: f64) -> Self {
        self.center = Some(center);
        self.radius_km = radius_km;
        self
    }

    pub fn requiring_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Whether geo filtering is active
    pub fn geo_active(&self) -> bool {
        self.radius_km > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedroom_buckets() {
        assert!(BedroomFilter::Any.matches(0));
        assert!(BedroomFilter::Exact(2).matches(2));
        assert!(!BedroomFilter::Exact(2).matches(3));
        assert!(BedroomFilter::ThreePlus.matches(3));
        assert!(BedroomFilter::ThreePlus.matches(6));
        assert!(!BedroomFilter::ThreePlus.matches(2));
    }

    #[test]
    fn test_default_filters_are_inactive() {
        let filters = SearchFilters::default();
        assert!(filters.max_display_price.is_none());
        assert_eq!(filters.display_currency, "CAD");
        assert!(!filters.geo_active());
        assert!(filters.only_available);
    }

    #[test]
    fn test_negative_radius_disables_geo() {
        let filters = SearchFilters::default().within(Coordinate::new(43.7, -79.4), -5.0);
        assert!(!filters.geo_active());
    }
}
