//! Purpose-built repository doubles for post service tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::post::{NewPost, Post};
use crate::errors::DomainError;
use crate::repositories::PostRepository;

/// Post store whose inserts always fail, for exercising the refund path
///
/// The window count reports the quota as used so that a submission is routed
/// through the debit-then-create sequence.
pub struct FailingPostRepository;

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn count_free_in_window(
        &self,
        _tailleur_id: i64,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        Ok(1)
    }

    async fn create(&self, _draft: NewPost) -> Result<Post, DomainError> {
        Err(DomainError::Database {
            message: "insert failed".to_string(),
        })
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Post>, DomainError> {
        Ok(None)
    }

    async fn update(&self, _post: Post) -> Result<Post, DomainError> {
        Err(DomainError::not_found("post"))
    }

    async fn delete(&self, _id: i64) -> Result<bool, DomainError> {
        Ok(false)
    }
}
