//! Common type definitions and utilities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp type alias
pub type Timestamp = DateTime<Utc>;

/// Mean Earth radius in meters, spherical model
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Coordinate for location-based features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check the coordinate lies in the valid latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
            && self.latitude.is_finite()
            && self.longitude.is_finite()
    }

    /// Calculate distance to another coordinate (in meters)
    /// Using Haversine formula
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }

    /// Distance to another coordinate in kilometers
    pub fn distance_km_to(&self, other: &Coordinate) -> f64 {
        self.distance_to(other) / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(43.6532, -79.3832).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_coordinate_distance() {
        // San Francisco to Los Angeles (approximately 559 km)
        let sf = Coordinate::new(37.7749, -122.4194);
        let la = Coordinate::new(34.0522, -118.2437);

        let distance_km = sf.distance_km_to(&la);
        assert!((distance_km - 559.0).abs() < 10.0);
    }

    #[test]
    fn test_downtown_distance() {
        // Downtown Toronto to a nearby search center, roughly 5.9 km apart
        let listing = Coordinate::new(43.6532, -79.3832);
        let center = Coordinate::new(43.7, -79.4);

        let distance_km = center.distance_km_to(&listing);
        assert!((distance_km - 5.9).abs() < 0.2);
    }

    #[test]
    fn test_zero_distance() {
        let point = Coordinate::new(45.0, -75.0);
        assert!(point.distance_to(&point) < 1e-9);
    }
}
