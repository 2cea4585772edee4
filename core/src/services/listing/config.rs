//! Configuration for the listing service

/// Configuration for the listing service
#[derive(Debug, Clone)]
pub struct ListingServiceConfig {
    /// Radius applied when the viewer saved a location but no radius
    pub default_radius_km: f64,
    /// Whether creating a listing requires a verified landlord
    pub require_verified_landlord: bool,
}

impl Default for ListingServiceConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 25.0,
            require_verified_landlord: true,
        }
    }
}
