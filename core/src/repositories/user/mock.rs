//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::app_user::AppUser;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, AppUser>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with users
    pub async fn seed(&self, users: Vec<AppUser>) {
        let mut guard = self.users.write().await;
        for user in users {
            guard.insert(user.id.clone(), user);
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AppUser>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn create(&self, user: AppUser) -> Result<AppUser, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(DomainError::Validation {
                message: "User already exists".to_string(),
            });
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: AppUser) -> Result<AppUser, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_favorites(
        &self,
        user_id: &str,
        favorites: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        let mut users = self.users.write().await;

        let user = users.get_mut(user_id).ok_or(DomainError::NotFound {
            resource: "User".to_string(),
        })?;

        user.favorite_listing_ids = favorites.clone();
        Ok(favorites)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id).is_some())
    }
}
