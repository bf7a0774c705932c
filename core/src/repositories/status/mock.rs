//! Mock implementation of StatusRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::status::{NewStatus, Status};
use crate::errors::DomainError;

use super::trait_::StatusRepository;

/// Mock status repository for testing
pub struct MockStatusRepository {
    statuses: Arc<RwLock<Vec<Status>>>,
}

impl MockStatusRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            statuses: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored statuses, for assertions
    pub async fn len(&self) -> usize {
        self.statuses.read().await.len()
    }
}

impl Default for MockStatusRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusRepository for MockStatusRepository {
    async fn create(&self, draft: NewStatus) -> Result<Status, DomainError> {
        let mut statuses = self.statuses.write().await;
        let status = Status {
            id: statuses.len() as i64 + 1,
            tailleur_id: draft.tailleur_id,
            files: draft.files,
            description: draft.description,
            duration: draft.duration,
            view_nb: draft.view_nb,
            created_at: Utc::now(),
        };
        statuses.push(status.clone());
        Ok(status)
    }
}
