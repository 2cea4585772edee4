//! Unit tests for review aggregation and submission

use std::sync::Arc;

use crate::domain::entities::app_user::AppUser;
use crate::domain::entities::review::Review;
use crate::errors::DomainError;
use crate::repositories::review::MockReviewRepository;
use crate::services::review::{average_rating, review_count, ReviewService};

fn reviewer() -> AppUser {
    let mut user = AppUser::new("u-1", "casey", "casey@example.com");
    user.verify();
    user
}

#[test]
fn test_average_of_empty_set_is_zero() {
    assert_eq!(average_rating(&[]), 0.0);
    assert_eq!(review_count(&[]), 0);
}

#[test]
fn test_average_is_arithmetic_mean() {
    let reviews = vec![
        Review::new("l-1", "u-1", "casey", 5, "great"),
        Review::new("l-1", "u-2", "jordan", 3, "fine"),
    ];
    assert_eq!(average_rating(&reviews), 4.0);
    assert_eq!(review_count(&reviews), 2);
}

#[tokio::test]
async fn test_aggregate_over_repository() {
    let repo = Arc::new(MockReviewRepository::new());
    repo.seed(vec![
        Review::new("l-1", "u-1", "casey", 4, "bright"),
        Review::new("l-1", "u-2", "jordan", 2, "loud"),
        Review::new("l-2", "u-3", "sam", 5, "perfect"),
    ])
    .await;

    let service = ReviewService::new(repo);
    let summary = service.aggregate("l-1").await.unwrap();

    assert_eq!(summary.count, 2);
    assert!((summary.average - 3.0).abs() < 1e-9);

    let empty = service.aggregate("l-none").await.unwrap();
    assert_eq!(empty.count, 0);
    assert_eq!(empty.average, 0.0);
}

#[tokio::test]
async fn test_aggregate_tolerates_skipped_documents() {
    let repo = Arc::new(MockReviewRepository::new().with_skipped(2));
    repo.seed(vec![Review::new("l-1", "u-1", "casey", 5, "great")])
        .await;

    let service = ReviewService::new(repo);
    let summary = service.aggregate("l-1").await.unwrap();
    assert_eq!(summary.count, 1);
}

#[tokio::test]
async fn test_submit_creates_immutable_review() {
    let repo = Arc::new(MockReviewRepository::new());
    let service = ReviewService::new(repo.clone());
    let author = reviewer();

    let review = service
        .submit(Some(&author), "l-1", 4, "  Bright and quiet.  ")
        .await
        .unwrap();

    assert_eq!(review.comment, "Bright and quiet.");
    assert!(review.is_verified);

    let listed = service.list_for_listing("l-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, review.id);
}

#[tokio::test]
async fn test_submit_requires_authentication() {
    let service = ReviewService::new(Arc::new(MockReviewRepository::new()));

    let result = service.submit(None, "l-1", 4, "nice").await;
    assert!(matches!(result, Err(DomainError::Auth(_))));
}

#[tokio::test]
async fn test_submit_rejects_out_of_scale_rating() {
    let service = ReviewService::new(Arc::new(MockReviewRepository::new()));
    let author = reviewer();

    assert!(service.submit(Some(&author), "l-1", 0, "bad").await.is_err());
    assert!(service.submit(Some(&author), "l-1", 6, "good").await.is_err());
}

#[tokio::test]
async fn test_submit_rejects_empty_comment() {
    let service = ReviewService::new(Arc::new(MockReviewRepository::new()));
    let author = reviewer();

    let result = service.submit(Some(&author), "l-1", 3, "   ").await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn test_list_sorted_newest_first() {
    let repo = Arc::new(MockReviewRepository::new());
    let mut older = Review::new("l-1", "u-1", "casey", 4, "first");
    older.created_at = older.created_at - chrono::Duration::days(2);
    let newer = Review::new("l-1", "u-2", "jordan", 5, "second");
    repo.seed(vec![older, newer]).await;

    let service = ReviewService::new(repo);
    let listed = service.list_for_listing("l-1").await.unwrap();
    assert_eq!(listed[0].comment, "second");
    assert_eq!(listed[1].comment, "first");
}
