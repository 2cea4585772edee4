//! Favorites index service

use std::sync::Arc;
use tracing;

use crate::domain::entities::app_user::AppUser;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::user::UserRepository;

/// Favorites service backed by the user's profile document
///
/// The toggled list is written back whole; the store applies no merging,
/// so the last writer wins.
pub struct FavoritesService<U: UserRepository> {
    /// Profile document access
    users: Arc<U>,
}

impl<U: UserRepository> FavoritesService<U> {
    /// Create a new favorites service
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Toggle a listing in the viewer's favorites
    ///
    /// Adds the id when absent and removes it when present, then persists
    /// the full updated list. Returns the list as persisted.
    pub async fn toggle(
        &self,
        viewer: Option<&AppUser>,
        listing_id: &str,
    ) -> DomainResult<Vec<String>> {
        let viewer = viewer.ok_or(AuthError::NotAuthenticated)?;

        let mut updated = viewer.clone();
        let added = updated.toggle_favorite(listing_id);

        let persisted = self
            .users
            .update_favorites(&viewer.id, updated.favorite_listing_ids)
            .await?;

        tracing::debug!(
            user_id = %viewer.id,
            listing_id = listing_id,
            added = added,
            event = "favorite_toggled",
            "Toggled favorite"
        );
        Ok(persisted)
    }

    /// Check whether a listing is starred by the viewer
    pub fn is_favorite(&self, viewer: &AppUser, listing_id: &str) -> bool {
        viewer.is_favorite(listing_id)
    }

    /// Favorite listing ids as currently persisted
    pub async fn favorites_of(&self, user_id: &str) -> DomainResult<Vec<String>> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotAuthenticated)?;
        Ok(user.favorite_listing_ids)
    }
}
