//! Unit tests for the status service

use std::sync::Arc;

use crate::domain::entities::status::{DEFAULT_STATUS_DESCRIPTION, DEFAULT_STATUS_DURATION};
use crate::domain::entities::tailor::Tailor;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockStatusRepository, MockTailorRepository};
use crate::services::status::{StatusDraft, StatusService};

async fn service() -> (
    Arc<MockStatusRepository>,
    StatusService<MockTailorRepository, MockStatusRepository>,
) {
    let tailors = Arc::new(MockTailorRepository::new());
    tailors.insert(Tailor::new(10, 1)).await;
    let statuses = Arc::new(MockStatusRepository::new());
    let service = StatusService::new(tailors, Arc::clone(&statuses));
    (statuses, service)
}

#[tokio::test]
async fn test_create_status_applies_policy_defaults() {
    let (statuses, service) = service().await;

    let status = service
        .create_status(
            1,
            StatusDraft {
                files: Some("uploads/status.png".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(status.tailleur_id, 10);
    assert_eq!(status.description, DEFAULT_STATUS_DESCRIPTION);
    assert_eq!(status.duration, DEFAULT_STATUS_DURATION);
    assert_eq!(status.view_nb, 0);
    assert_eq!(statuses.len().await, 1);
}

#[tokio::test]
async fn test_create_status_requires_a_file() {
    let (statuses, service) = service().await;

    let result = service
        .create_status(
            1,
            StatusDraft {
                files: None,
                description: Some("Tenue du jour".to_string()),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));
    assert_eq!(statuses.len().await, 0);
}

#[tokio::test]
async fn test_create_status_for_unknown_tailor() {
    let (_, service) = service().await;

    let result = service
        .create_status(
            99,
            StatusDraft {
                files: Some("uploads/status.png".to_string()),
                description: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(DomainError::NotFound { resource }) if resource == "tailleur"
    ));
}
