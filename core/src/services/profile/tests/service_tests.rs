//! Unit tests for the profile service

use std::sync::Arc;

use crate::domain::entities::app_user::AppUser;
use crate::errors::DomainError;
use crate::repositories::user::MockUserRepository;
use crate::services::profile::ProfileService;
use rn_shared::types::common::Coordinate;

async fn service_with_user(user: AppUser) -> ProfileService<MockUserRepository> {
    let repo = Arc::new(MockUserRepository::new());
    repo.seed(vec![user]).await;
    ProfileService::new(repo)
}

fn consenting_user() -> AppUser {
    let mut user = AppUser::new("u-1", "casey", "casey@example.com");
    user.location_consent = true;
    user
}

#[tokio::test]
async fn test_save_search_location() {
    let user = consenting_user();
    let service = service_with_user(user.clone()).await;

    let updated = service
        .save_search_location(Some(&user), Coordinate::new(43.7, -79.4), 10.0)
        .await
        .unwrap();

    assert_eq!(updated.search_radius_km, Some(10.0));
    assert!(updated.saved_coordinate().is_some());
}

#[tokio::test]
async fn test_save_search_location_requires_consent() {
    let user = AppUser::new("u-1", "casey", "casey@example.com");
    let service = service_with_user(user.clone()).await;

    let result = service
        .save_search_location(Some(&user), Coordinate::new(43.7, -79.4), 10.0)
        .await;
    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
}

#[tokio::test]
async fn test_save_search_location_validates_inputs() {
    let user = consenting_user();
    let service = service_with_user(user.clone()).await;

    let bad_coordinate = service
        .save_search_location(Some(&user), Coordinate::new(91.0, 0.0), 10.0)
        .await;
    assert!(matches!(
        bad_coordinate,
        Err(DomainError::ValidationErr(_))
    ));

    let bad_radius = service
        .save_search_location(Some(&user), Coordinate::new(43.7, -79.4), 0.0)
        .await;
    assert!(matches!(bad_radius, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn test_revoking_consent_clears_saved_location() {
    let mut user = consenting_user();
    user.set_search_location(Coordinate::new(43.7, -79.4), 10.0);
    let service = service_with_user(user.clone()).await;

    let updated = service.set_location_consent(Some(&user), false).await.unwrap();

    assert!(!updated.location_consent);
    assert!(updated.saved_coordinate().is_none());
    assert!(updated.search_radius_km.is_none());
}

#[tokio::test]
async fn test_update_profile_validation() {
    let mut user = consenting_user();
    let service = service_with_user(user.clone()).await;

    user.profile_picture_url = Some("not-a-url".to_string());
    assert!(service.update_profile(Some(&user)).await.is_err());

    user.profile_picture_url = Some("https://img.example.com/me.jpg".to_string());
    assert!(service.update_profile(Some(&user)).await.is_ok());

    user.email = "invalid".to_string();
    assert!(service.update_profile(Some(&user)).await.is_err());
}

#[tokio::test]
async fn test_operations_require_authentication() {
    let service = service_with_user(consenting_user()).await;

    assert!(service
        .save_search_location(None, Coordinate::new(0.0, 0.0), 5.0)
        .await
        .is_err());
    assert!(service.set_location_consent(None, true).await.is_err());
    assert!(service.update_profile(None).await.is_err());
}
