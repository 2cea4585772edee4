//! Listing filter predicates.

use crate::domain::entities::currency::CurrencyOption;
use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::search_filters::SearchFilters;

/// Price bound check in the display currency
///
/// With no bound every listing passes. With a bound, listings whose
/// stored price is not numeric are excluded since they cannot be
/// compared.
pub fn matches_price(listing: &Listing, max_display_price: Option<f64>, currency: &CurrencyOption) -> bool {
    let Some(max) = max_display_price else {
        return true;
    };
    match listing.price_amount() {
        Some(base_amount) => base_amount * currency.rate <= max,
        None => false,
    }
}

/// Amenity check: the listing must carry every selected tag
pub fn matches_amenities(listing: &Listing, required: &[String]) -> bool {
    required.iter().all(|amenity| listing.has_amenity(amenity))
}

/// Apply every non-geo filter to one listing
pub fn passes(listing: &Listing, filters: &SearchFilters, currency: &CurrencyOption) -> bool {
    filters.bedrooms.matches(listing.bedrooms)
        && filters.bathrooms.matches(listing.bathrooms)
        && matches_price(listing, filters.max_display_price, currency)
        && matches_amenities(listing, &filters.amenities)
}
