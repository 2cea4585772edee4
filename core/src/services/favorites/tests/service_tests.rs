//! Unit tests for the favorites service

use std::sync::Arc;

use crate::domain::entities::app_user::AppUser;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};
use crate::services::favorites::FavoritesService;

async fn seeded_service() -> (FavoritesService<MockUserRepository>, AppUser) {
    let repo = Arc::new(MockUserRepository::new());
    let user = AppUser::new("u-1", "casey", "casey@example.com");
    repo.seed(vec![user.clone()]).await;
    (FavoritesService::new(repo), user)
}

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let (service, user) = seeded_service().await;

    let after_add = service.toggle(Some(&user), "l-1").await.unwrap();
    assert_eq!(after_add, vec!["l-1".to_string()]);

    let mut user_with_favorite = user.clone();
    user_with_favorite.favorite_listing_ids = after_add;
    let after_remove = service
        .toggle(Some(&user_with_favorite), "l-1")
        .await
        .unwrap();
    assert!(after_remove.is_empty());
}

#[tokio::test]
async fn test_double_toggle_is_involution() {
    let (service, mut user) = seeded_service().await;
    user.favorite_listing_ids = vec!["l-7".to_string(), "l-9".to_string()];
    let original = user.favorite_listing_ids.clone();

    let once = service.toggle(Some(&user), "l-9").await.unwrap();
    let mut toggled_user = user.clone();
    toggled_user.favorite_listing_ids = once;
    let twice = service.toggle(Some(&toggled_user), "l-9").await.unwrap();

    assert_eq!(twice, original);
}

#[tokio::test]
async fn test_toggle_persists_whole_list() {
    let repo = Arc::new(MockUserRepository::new());
    let user = AppUser::new("u-1", "casey", "casey@example.com");
    repo.seed(vec![user.clone()]).await;
    let service = FavoritesService::new(repo.clone());

    service.toggle(Some(&user), "l-3").await.unwrap();

    let stored = repo.find_by_id("u-1").await.unwrap().unwrap();
    assert_eq!(stored.favorite_listing_ids, vec!["l-3".to_string()]);
}

#[tokio::test]
async fn test_toggle_requires_authentication() {
    let (service, _) = seeded_service().await;

    let result = service.toggle(None, "l-1").await;
    assert!(matches!(result, Err(DomainError::Auth(_))));
}

#[tokio::test]
async fn test_is_favorite_reads_profile_state() {
    let (service, mut user) = seeded_service().await;
    user.favorite_listing_ids = vec!["l-2".to_string()];

    assert!(service.is_favorite(&user, "l-2"));
    assert!(!service.is_favorite(&user, "l-4"));
}

#[tokio::test]
async fn test_favorites_of_unknown_user_fails() {
    let (service, _) = seeded_service().await;

    assert!(service.favorites_of("missing").await.is_err());
}
