//! User repository trait defining the interface for profile persistence.

use async_trait::async_trait;

use crate::domain::entities::app_user::AppUser;
use crate::errors::DomainError;

/// Repository contract for user profile documents
///
/// Profiles live in a single document per user; writes replace the whole
/// document, so the last writer wins.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(AppUser))` - user found
    /// * `Ok(None)` - no user with that id
    /// * `Err(DomainError)` - transport failure
    async fn find_by_id(&self, id: &str) -> Result<Option<AppUser>, DomainError>;

    /// Persist a new user profile document
    async fn create(&self, user: AppUser) -> Result<AppUser, DomainError>;

    /// Replace an existing user profile document
    async fn update(&self, user: AppUser) -> Result<AppUser, DomainError>;

    /// Write the full favorites list back to the user's profile document
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - the list as persisted
    /// * `Err(DomainError)` - user missing or transport failure
    async fn update_favorites(
        &self,
        user_id: &str,
        favorites: Vec<String>,
    ) -> Result<Vec<String>, DomainError>;

    /// Delete a user profile document
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
