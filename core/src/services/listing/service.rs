//! Listing service implementation

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing;

use rn_shared::types::common::Coordinate;
use rn_shared::utils::validation::Validate;

use crate::domain::entities::app_user::AppUser;
use crate::domain::entities::listing::{Listing, ListingUpdate, NewListing};
use crate::domain::value_objects::search_filters::SearchFilters;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::listing::ListingRepository;
use crate::repositories::review::ReviewRepository;
use crate::services::currency::{CurrencyService, RateProvider};
use crate::services::review::ReviewService;

use super::config::ListingServiceConfig;
use super::filters;
use super::generation::FetchGeneration;
use super::geo;
use super::types::{AnnotatedListing, RefreshOutcome};

/// Listing store and search pipeline
///
/// Holds the in-memory listing set fetched from the remote collection and
/// runs searches against it. The set is owned by this service and only
/// replaced by a refresh that is still the latest one in flight.
pub struct ListingService<L, P, V>
where
    L: ListingRepository,
    P: RateProvider,
    V: ReviewRepository,
{
    /// Listing document access
    listings: Arc<L>,
    /// Currency conversion for price filtering and display
    currency: Arc<CurrencyService<P>>,
    /// Review aggregation for result annotation
    reviews: Arc<ReviewService<V>>,
    /// Service configuration
    config: ListingServiceConfig,
    /// In-memory listing set
    cache: RwLock<Vec<Listing>>,
    /// Stale-response guard for refreshes
    generation: FetchGeneration,
}

impl<L, P, V> ListingService<L, P, V>
where
    L: ListingRepository,
    P: RateProvider,
    V: ReviewRepository,
{
    /// Create a new listing service
    pub fn new(
        listings: Arc<L>,
        currency: Arc<CurrencyService<P>>,
        reviews: Arc<ReviewService<V>>,
        config: ListingServiceConfig,
    ) -> Self {
        Self {
            listings,
            currency,
            reviews,
            config,
            cache: RwLock::new(Vec::new()),
            generation: FetchGeneration::new(),
        }
    }

    /// Refetch the listing collection
    ///
    /// A refresh that was superseded by a newer one discards its response
    /// and reports `Superseded` instead of overwriting newer state.
    pub async fn refresh(&self) -> DomainResult<RefreshOutcome> {
        let ticket = self.generation.begin();
        let batch = self.listings.fetch_all().await?;

        if !self.generation.is_current(ticket) {
            tracing::debug!(
                ticket = ticket,
                event = "refresh_superseded",
                "Discarding superseded listing fetch"
            );
            return Ok(RefreshOutcome::Superseded);
        }

        if batch.skipped > 0 {
            tracing::warn!(
                skipped = batch.skipped,
                "Skipped malformed listing documents"
            );
        }

        let count = batch.listings.len();
        *self.cache.write().await = batch.listings;
        tracing::info!(count = count, event = "listings_refreshed", "Refreshed listings");

        Ok(RefreshOutcome::Completed {
            count,
            skipped: batch.skipped,
        })
    }

    /// Listings currently held in memory
    pub async fn cached(&self) -> Vec<Listing> {
        self.cache.read().await.clone()
    }

    /// Fetch one listing by id
    pub async fn fetch_by_id(&self, id: &str) -> DomainResult<Option<Listing>> {
        self.listings.fetch_by_id(id).await
    }

    /// Fetch the listings owned by a landlord
    pub async fn fetch_for_landlord(&self, landlord_id: &str) -> DomainResult<Vec<Listing>> {
        let batch = self.listings.fetch_for_landlord(landlord_id).await?;
        if batch.skipped > 0 {
            tracing::warn!(
                landlord_id = landlord_id,
                skipped = batch.skipped,
                "Skipped malformed listing documents"
            );
        }
        Ok(batch.listings)
    }

    /// Search the in-memory listing set
    ///
    /// Pipeline: availability, radius, price/bedrooms/bathrooms/amenities,
    /// then annotation with favorites, review aggregates, and display
    /// prices.
    pub async fn search(
        &self,
        search_filters: &SearchFilters,
        viewer: Option<&AppUser>,
    ) -> DomainResult<Vec<AnnotatedListing>> {
        let mut listings = self.cached().await;

        if search_filters.only_available {
            listings.retain(|listing| listing.is_available);
        }

        let geo_scope = self.resolve_geo_scope(search_filters, viewer);
        if let Some((center, radius_km)) = geo_scope {
            listings = geo::within_radius(listings, center, radius_km);
        }

        let currency = self
            .currency
            .option_for(&search_filters.display_currency)
            .await?;
        listings.retain(|listing| filters::passes(listing, search_filters, &currency));

        let mut results = Vec::with_capacity(listings.len());
        for listing in listings {
            let summary = match self.reviews.aggregate(&listing.id).await {
                Ok(summary) => summary,
                Err(error) => {
                    // Degrade to the denormalized rating rather than
                    // dropping the listing from results
                    tracing::warn!(
                        listing_id = %listing.id,
                        error = %error,
                        "Falling back to cached rating"
                    );
                    crate::services::review::RatingSummary {
                        average: listing.average_rating.unwrap_or(0.0),
                        count: 0,
                    }
                }
            };

            let distance_km = geo_scope.and_then(|(center, _)| {
                listing
                    .coordinate()
                    .map(|coordinate| geo::distance_km(center, coordinate))
            });
            let display_price =
                CurrencyService::<P>::display_price_with(&currency, &listing.price);
            let is_favorite = viewer.is_some_and(|v| v.is_favorite(&listing.id));

            results.push(AnnotatedListing {
                listing,
                is_favorite,
                average_rating: summary.average,
                review_count: summary.count,
                display_price,
                distance_km,
            });
        }

        Ok(results)
    }

    /// Create a listing owned by the given landlord
    pub async fn create_listing(
        &self,
        landlord: Option<&AppUser>,
        draft: NewListing,
    ) -> DomainResult<Listing> {
        let landlord = landlord.ok_or(AuthError::NotAuthenticated)?;
        if self.config.require_verified_landlord && !landlord.is_verified {
            return Err(AuthError::NotVerified.into());
        }

        draft.validate().map_err(|errors| DomainError::Validation {
            message: errors
                .first_message()
                .unwrap_or("Invalid listing")
                .to_string(),
        })?;

        let listing = draft.into_listing(landlord.id.clone());
        let created = self.listings.create(listing).await?;
        tracing::info!(
            listing_id = %created.id,
            landlord_id = %created.landlord_id,
            event = "listing_created",
            "Created listing"
        );
        Ok(created)
    }

    /// Apply an owner's edits to an existing listing
    pub async fn update_listing(
        &self,
        landlord: Option<&AppUser>,
        update: ListingUpdate,
    ) -> DomainResult<Listing> {
        let landlord = landlord.ok_or(AuthError::NotAuthenticated)?;

        update.validate().map_err(|errors| DomainError::Validation {
            message: errors
                .first_message()
                .unwrap_or("Invalid update")
                .to_string(),
        })?;

        let mut listing = self
            .listings
            .fetch_by_id(&update.id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Listing".to_string(),
            })?;

        if !listing.is_owned_by(&landlord.id) {
            return Err(AuthError::NotOwner.into());
        }

        update.apply_to(&mut listing);
        self.listings.update(listing).await
    }

    /// Delete an owner's listing
    pub async fn delete_listing(
        &self,
        landlord: Option<&AppUser>,
        id: &str,
    ) -> DomainResult<bool> {
        let landlord = landlord.ok_or(AuthError::NotAuthenticated)?;

        let Some(listing) = self.listings.fetch_by_id(id).await? else {
            return Ok(false);
        };
        if !listing.is_owned_by(&landlord.id) {
            return Err(AuthError::NotOwner.into());
        }

        let deleted = self.listings.delete(id).await?;
        if deleted {
            tracing::info!(listing_id = id, event = "listing_deleted", "Deleted listing");
        }
        Ok(deleted)
    }

    /// Resolve the active search center and radius
    ///
    /// An explicit center wins; otherwise a consenting viewer's saved
    /// location is used with their saved radius or the configured
    /// default. Returns `None` when geo filtering is off.
    fn resolve_geo_scope(
        &self,
        search_filters: &SearchFilters,
        viewer: Option<&AppUser>,
    ) -> Option<(Coordinate, f64)> {
        if let Some(center) = search_filters.center {
            return search_filters
                .geo_active()
                .then_some((center, search_filters.radius_km));
        }

        let viewer = viewer?;
        if !viewer.location_consent {
            return None;
        }
        let center = viewer.saved_coordinate()?;
        let radius_km = if search_filters.geo_active() {
            search_filters.radius_km
        } else {
            viewer
                .search_radius_km
                .unwrap_or(self.config.default_radius_km)
        };
        (radius_km > 0.0).then_some((center, radius_km))
    }
}
