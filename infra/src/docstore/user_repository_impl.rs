//! Document store implementation of the UserRepository trait.

use async_trait::async_trait;
use std::sync::Arc;

use rn_core::domain::entities::app_user::AppUser;
use rn_core::errors::DomainError;
use rn_core::repositories::user::UserRepository;

use super::DocStoreClient;

/// Name of the users collection
pub(crate) const USERS: &str = "users";

/// User repository backed by the remote document store
pub struct DocStoreUserRepository {
    client: Arc<DocStoreClient>,
}

impl DocStoreUserRepository {
    /// Create a new repository over the given client
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }

    fn to_document(user: &AppUser) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(user).map_err(|e| DomainError::Internal {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl UserRepository for DocStoreUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AppUser>, DomainError> {
        let document = self
            .client
            .get_document(USERS, id)
            .await
            .map_err(DomainError::from)?;

        match document {
            Some(value) => match serde_json::from_value::<AppUser>(value) {
                Ok(user) => Ok(Some(user)),
                Err(error) => {
                    tracing::debug!(
                        user_id = id,
                        error = %error,
                        "User document no longer decodes"
                    );
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn create(&self, user: AppUser) -> Result<AppUser, DomainError> {
        if self.find_by_id(&user.id).await?.is_some() {
            return Err(DomainError::Validation {
                message: "User already exists".to_string(),
            });
        }

        let document = Self::to_document(&user)?;
        self.client
            .put_document(USERS, &user.id, &document)
            .await
            .map_err(DomainError::from)?;
        Ok(user)
    }

    async fn update(&self, user: AppUser) -> Result<AppUser, DomainError> {
        if self.find_by_id(&user.id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        let document = Self::to_document(&user)?;
        self.client
            .put_document(USERS, &user.id, &document)
            .await
            .map_err(DomainError::from)?;
        Ok(user)
    }

    async fn update_favorites(
        &self,
        user_id: &str,
        favorites: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        let mut user = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        // The whole profile document is written back; the store keeps
        // whichever write lands last
        user.favorite_listing_ids = favorites.clone();
        let document = Self::to_document(&user)?;
        self.client
            .put_document(USERS, user_id, &document)
            .await
            .map_err(DomainError::from)?;
        Ok(favorites)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        self.client
            .delete_document(USERS, id)
            .await
            .map_err(DomainError::from)
    }
}
