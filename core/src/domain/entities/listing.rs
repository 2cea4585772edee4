//! Listing entity representing a rental property in the RentNest marketplace.

use chrono::{DateTime, Utc};
use rn_shared::types::common::Coordinate;
use rn_shared::utils::money;
use rn_shared::utils::validation::{validators, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on the number of images a listing may carry
pub const MAX_IMAGES: usize = 10;

/// Rental listing entity
///
/// Documents in the remote store are schemaless; optional fields default
/// when absent so older documents still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier for the listing
    pub id: String,

    /// Short display title
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Monthly price as a decimal string in the base currency
    pub price: String,

    /// Ordered image URLs
    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Street address
    #[serde(default)]
    pub street: String,

    /// City
    #[serde(default)]
    pub city: String,

    /// Province or territory
    #[serde(default)]
    pub province: String,

    /// Latitude, when the landlord geocoded the address
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude, when the landlord geocoded the address
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Number of bedrooms
    pub bedrooms: u32,

    /// Number of bathrooms
    pub bathrooms: u32,

    /// Interior size in square feet
    #[serde(default)]
    pub square_footage: u32,

    /// Amenity tags (e.g. "WiFi", "Parking")
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Whether the unit is currently available
    #[serde(default = "default_available")]
    pub is_available: bool,

    /// Identifier of the owning landlord
    pub landlord_id: String,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,

    /// Cached average rating, denormalized from the reviews sub-collection
    #[serde(default)]
    pub average_rating: Option<f64>,
}

fn default_available() -> bool {
    true
}

impl Listing {
    /// Geographic coordinate, when both components are present and valid
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                let coordinate = Coordinate::new(latitude, longitude);
                coordinate.is_valid().then_some(coordinate)
            }
            _ => None,
        }
    }

    /// Price parsed as an amount in the base currency
    pub fn price_amount(&self) -> Option<f64> {
        money::parse_price(&self.price)
    }

    /// Case-insensitive amenity membership check
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(amenity.trim()))
    }

    /// Check whether the given landlord owns this listing
    pub fn is_owned_by(&self, landlord_id: &str) -> bool {
        self.landlord_id == landlord_id
    }

    pub fn mark_unavailable(&mut self) {
        self.is_available = false;
    }

    pub fn mark_available(&mut self) {
        self.is_available = true;
    }
}

/// Input for creating a listing
///
/// Validated before an id and timestamp are minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub street: String,
    pub city: String,
    pub province: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub square_footage: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl NewListing {
    /// Mint a listing owned by the given landlord
    pub fn into_listing(self, landlord_id: impl Into<String>) -> Listing {
        Listing {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price.trim().to_string(),
            image_urls: self.image_urls,
            street: self.street,
            city: self.city,
            province: self.province,
            latitude: self.latitude,
            longitude: self.longitude,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_footage: self.square_footage,
            amenities: self.amenities,
            is_available: true,
            landlord_id: landlord_id.into(),
            created_at: Utc::now(),
            average_rating: None,
        }
    }
}

impl Validate for NewListing {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.title) {
            errors.add_error("title", "Title is required", "REQUIRED");
        } else if !validators::length_between(&self.title, 3, 120) {
            errors.add_error("title", "Title must be 3-120 characters", "LENGTH");
        }

        match money::parse_price(&self.price) {
            Some(amount) if amount > 0.0 => {}
            Some(_) => errors.add_error("price", "Price must be positive", "RANGE"),
            None => errors.add_error("price", "Price must be a decimal number", "FORMAT"),
        }

        if !validators::not_empty(&self.city) {
            errors.add_error("city", "City is required", "REQUIRED");
        }

        match (self.latitude, self.longitude) {
            (None, None) => {}
            (Some(lat), Some(lon)) => {
                if !validators::valid_latitude(lat) || !validators::valid_longitude(lon) {
                    errors.add_error("coordinate", "Coordinate out of range", "RANGE");
                }
            }
            _ => errors.add_error(
                "coordinate",
                "Latitude and longitude must be set together",
                "FORMAT",
            ),
        }

        if self.image_urls.len() > MAX_IMAGES {
            errors.add_error("image_urls", "Too many images", "LENGTH");
        }
        for url in &self.image_urls {
            if !validators::valid_url(url) {
                errors.add_error("image_urls", "Image URL must be http(s)", "FORMAT");
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

/// Partial update applied to an existing listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingUpdate {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl ListingUpdate {
    pub fn for_listing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Apply the populated fields onto a listing
    pub fn apply_to(&self, listing: &mut Listing) {
        if let Some(title) = &self.title {
            listing.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            listing.description = description.trim().to_string();
        }
        if let Some(price) = &self.price {
            listing.price = price.trim().to_string();
        }
        if let Some(image_urls) = &self.image_urls {
            listing.image_urls = image_urls.clone();
        }
        if let Some(amenities) = &self.amenities {
            listing.amenities = amenities.clone();
        }
        if let Some(is_available) = self.is_available {
            listing.is_available = is_available;
        }
    }
}

impl Validate for ListingUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.id) {
            errors.add_error("id", "Listing id is required", "REQUIRED");
        }

        if let Some(title) = &self.title {
            if !validators::length_between(title, 3, 120) {
                errors.add_error("title", "Title must be 3-120 characters", "LENGTH");
            }
        }

        if let Some(price) = &self.price {
            match money::parse_price(price) {
                Some(amount) if amount > 0.0 => {}
                _ => errors.add_error("price", "Price must be a positive decimal", "FORMAT"),
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}
