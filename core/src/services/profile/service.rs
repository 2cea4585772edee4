//! Profile edit service

use std::sync::Arc;
use tracing;

use crate::domain::entities::app_user::AppUser;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::user::UserRepository;
use rn_shared::types::common::Coordinate;
use rn_shared::utils::validation::validators;

/// Profile service for user-document edits
pub struct ProfileService<U: UserRepository> {
    /// Profile document access
    users: Arc<U>,
}

impl<U: UserRepository> ProfileService<U> {
    /// Create a new profile service
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Save the viewer's search center and radius
    ///
    /// Requires location consent to have been granted.
    pub async fn save_search_location(
        &self,
        viewer: Option<&AppUser>,
        coordinate: Coordinate,
        radius_km: f64,
    ) -> DomainResult<AppUser> {
        let viewer = viewer.ok_or(AuthError::NotAuthenticated)?;

        if !viewer.location_consent {
            return Err(DomainError::BusinessRule {
                message: "Location consent has not been granted".to_string(),
            });
        }
        if !coordinate.is_valid() {
            return Err(ValidationError::InvalidCoordinate {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            }
            .into());
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(ValidationError::InvalidRadius { radius: radius_km }.into());
        }

        let mut updated = viewer.clone();
        updated.set_search_location(coordinate, radius_km);
        let persisted = self.users.update(updated).await?;

        tracing::debug!(
            user_id = %persisted.id,
            radius_km = radius_km,
            event = "search_location_saved",
            "Saved search location"
        );
        Ok(persisted)
    }

    /// Grant or revoke location consent
    ///
    /// Revoking clears the stored search location before persisting.
    pub async fn set_location_consent(
        &self,
        viewer: Option<&AppUser>,
        granted: bool,
    ) -> DomainResult<AppUser> {
        let viewer = viewer.ok_or(AuthError::NotAuthenticated)?;

        let mut updated = viewer.clone();
        updated.set_location_consent(granted);
        let persisted = self.users.update(updated).await?;

        tracing::info!(
            user_id = %persisted.id,
            granted = granted,
            event = "location_consent_changed",
            "Location consent changed"
        );
        Ok(persisted)
    }

    /// Persist profile edits after validating the mutable fields
    pub async fn update_profile(&self, viewer: Option<&AppUser>) -> DomainResult<AppUser> {
        let viewer = viewer.ok_or(AuthError::NotAuthenticated)?;

        if !validators::not_empty(&viewer.username) {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if !viewer.email.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
            }
            .into());
        }
        if let Some(url) = &viewer.profile_picture_url {
            if !validators::valid_url(url) {
                return Err(ValidationError::InvalidFormat {
                    field: "profile_picture_url".to_string(),
                }
                .into());
            }
        }

        self.users.update(viewer.clone()).await
    }
}
