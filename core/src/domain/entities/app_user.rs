//! AppUser entity representing a registered user in the RentNest system.

use rn_shared::types::common::Coordinate;
use serde::{Deserialize, Serialize};

/// Registered user profile
///
/// Identity and sign-in live with the hosted auth provider; this document
/// carries the marketplace-facing profile, favorites, and saved search
/// location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    /// Unique identifier assigned by the identity provider
    pub id: String,

    /// Unique handle shown on listings and reviews
    pub username: String,

    /// Contact email
    pub email: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Profile picture URL, when one was uploaded
    #[serde(default)]
    pub profile_picture_url: Option<String>,

    /// Aggregate rating of this user as a landlord
    #[serde(default)]
    pub rating: f64,

    /// Review snippets left on this user's profile
    #[serde(default)]
    pub reviews: Vec<String>,

    /// Ids of listings the user starred (unique, unordered)
    #[serde(default)]
    pub favorite_listing_ids: Vec<String>,

    /// Whether the user consented to location-based search
    #[serde(default)]
    pub location_consent: bool,

    /// Saved search center latitude
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Saved search center longitude
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Saved search radius in kilometers
    #[serde(default)]
    pub search_radius_km: Option<f64>,

    /// Whether identity verification completed
    #[serde(default)]
    pub is_verified: bool,
}

impl AppUser {
    /// Creates a new AppUser instance
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            name: String::new(),
            profile_picture_url: None,
            rating: 0.0,
            reviews: Vec::new(),
            favorite_listing_ids: Vec::new(),
            location_consent: false,
            latitude: None,
            longitude: None,
            search_radius_km: None,
            is_verified: false,
        }
    }

    /// Saved search center, when present and valid
    pub fn saved_coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                let coordinate = Coordinate::new(latitude, longitude);
                coordinate.is_valid().then_some(coordinate)
            }
            _ => None,
        }
    }

    /// Check whether a listing is starred
    pub fn is_favorite(&self, listing_id: &str) -> bool {
        self.favorite_listing_ids.iter().any(|id| id == listing_id)
    }

    /// Toggle a listing in the favorites set
    ///
    /// Returns `true` when the listing was added, `false` when removed.
    /// Duplicates are collapsed so the list keeps set semantics.
    pub fn toggle_favorite(&mut self, listing_id: &str) -> bool {
        if self.is_favorite(listing_id) {
            self.favorite_listing_ids.retain(|id| id != listing_id);
            false
        } else {
            self.favorite_listing_ids.push(listing_id.to_string());
            true
        }
    }

    /// Store a search center and radius
    pub fn set_search_location(&mut self, coordinate: Coordinate, radius_km: f64) {
        self.latitude = Some(coordinate.latitude);
        self.longitude = Some(coordinate.longitude);
        self.search_radius_km = Some(radius_km);
    }

    /// Clear the stored search center and radius
    pub fn clear_search_location(&mut self) {
        self.latitude = None;
        self.longitude = None;
        self.search_radius_km = None;
    }

    /// Grant or revoke location consent
    ///
    /// Revoking also clears any stored search location.
    pub fn set_location_consent(&mut self, granted: bool) {
        self.location_consent = granted;
        if !granted {
            self.clear_search_location();
        }
    }

    /// Marks the user as identity-verified
    pub fn verify(&mut self) {
        self.is_verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = AppUser::new("u-1", "casey", "casey@example.com");
        assert_eq!(user.id, "u-1");
        assert!(!user.is_verified);
        assert!(!user.location_consent);
        assert!(user.favorite_listing_ids.is_empty());
    }

    #[test]
    fn test_favorite_toggle_involution() {
        let mut user = AppUser::new("u-1", "casey", "casey@example.com");
        let before = user.favorite_listing_ids.clone();

        assert!(user.toggle_favorite("l-1"));
        assert!(user.is_favorite("l-1"));
        assert!(!user.toggle_favorite("l-1"));
        assert_eq!(user.favorite_listing_ids, before);
    }

    #[test]
    fn test_favorites_stay_unique() {
        let mut user = AppUser::new("u-1", "casey", "casey@example.com");
        user.toggle_favorite("l-1");
        user.toggle_favorite("l-2");
        user.toggle_favorite("l-1");
        user.toggle_favorite("l-1");

        assert_eq!(
            user.favorite_listing_ids
                .iter()
                .filter(|id| *id == "l-1")
                .count(),
            1
        );
    }

    #[test]
    fn test_saved_coordinate_requires_both_fields() {
        let mut user = AppUser::new("u-1", "casey", "casey@example.com");
        assert!(user.saved_coordinate().is_none());

        user.latitude = Some(43.7);
        assert!(user.saved_coordinate().is_none());

        user.longitude = Some(-79.4);
        assert!(user.saved_coordinate().is_some());

        user.latitude = Some(123.0);
        assert!(user.saved_coordinate().is_none());
    }

    #[test]
    fn test_revoking_consent_clears_location() {
        let mut user = AppUser::new("u-1", "casey", "casey@example.com");
        user.set_location_consent(true);
        user.set_search_location(Coordinate::new(43.7, -79.4), 10.0);

        user.set_location_consent(false);
        assert!(user.saved_coordinate().is_none());
        assert!(user.search_radius_km.is_none());
    }
}
