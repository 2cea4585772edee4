//! Radius filtering around a search center.

use rn_shared::types::common::Coordinate;

use crate::domain::entities::listing::Listing;

/// Distance between two coordinates in kilometers
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    a.distance_km_to(&b)
}

/// Keep the listings within `radius_km` of `center`
///
/// Listings without a usable coordinate are excluded. A zero or negative
/// radius turns the filter off and returns the input unchanged.
pub fn within_radius(listings: Vec<Listing>, center: Coordinate, radius_km: f64) -> Vec<Listing> {
    if radius_km <= 0.0 {
        return listings;
    }

    listings
        .into_iter()
        .filter(|listing| match listing.coordinate() {
            Some(coordinate) => distance_km(center, coordinate) <= radius_km,
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn listing_at(id: &str, latitude: Option<f64>, longitude: Option<f64>) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {}", id),
            description: String::new(),
            price: "1000".to_string(),
            image_urls: Vec::new(),
            street: String::new(),
            city: "Toronto".to_string(),
            province: "ON".to_string(),
            latitude,
            longitude,
            bedrooms: 1,
            bathrooms: 1,
            square_footage: 500,
            amenities: Vec::new(),
            is_available: true,
            landlord_id: "landlord-1".to_string(),
            created_at: Utc::now(),
            average_rating: None,
        }
    }

    #[test]
    fn test_downtown_listing_within_ten_km() {
        let listings = vec![listing_at("l-1", Some(43.6532), Some(-79.3832))];
        let center = Coordinate::new(43.7, -79.4);

        let kept = within_radius(listings.clone(), center, 10.0);
        assert_eq!(kept.len(), 1);

        let kept = within_radius(listings, center, 1.0);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_included_iff_within_radius() {
        let center = Coordinate::new(43.7, -79.4);
        let listings = vec![
            listing_at("near", Some(43.71), Some(-79.41)),
            listing_at("far", Some(44.5), Some(-80.5)),
            listing_at("edge", Some(43.6532), Some(-79.3832)),
        ];

        let kept = within_radius(listings.clone(), center, 10.0);
        for listing in &kept {
            let coordinate = listing.coordinate().unwrap();
            assert!(distance_km(center, coordinate) <= 10.0);
        }
        for listing in &listings {
            if !kept.iter().any(|k| k.id == listing.id) {
                let coordinate = listing.coordinate().unwrap();
                assert!(distance_km(center, coordinate) > 10.0);
            }
        }
    }

    #[test]
    fn test_listings_without_coordinate_are_excluded() {
        let center = Coordinate::new(43.7, -79.4);
        let listings = vec![
            listing_at("located", Some(43.7), Some(-79.4)),
            listing_at("unlocated", None, None),
            listing_at("half", Some(43.7), None),
            listing_at("invalid", Some(120.0), Some(-79.4)),
        ];

        let kept = within_radius(listings, center, 50.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "located");
    }

    #[test]
    fn test_zero_radius_disables_filtering() {
        let center = Coordinate::new(43.7, -79.4);
        let listings = vec![
            listing_at("far", Some(49.28), Some(-123.12)),
            listing_at("unlocated", None, None),
        ];

        let kept = within_radius(listings, center, 0.0);
        assert_eq!(kept.len(), 2);

        let listings = vec![listing_at("far", Some(49.28), Some(-123.12))];
        let kept = within_radius(listings, center, -3.0);
        assert_eq!(kept.len(), 1);
    }
}
