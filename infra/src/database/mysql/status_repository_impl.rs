//! MySQL implementation of the StatusRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use ch_core::domain::entities::status::{NewStatus, Status};
use ch_core::errors::DomainError;
use ch_core::repositories::StatusRepository;

/// MySQL implementation of StatusRepository
pub struct MySqlStatusRepository {
    pool: MySqlPool,
}

impl MySqlStatusRepository {
    /// Create a new MySQL status repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for MySqlStatusRepository {
    async fn create(&self, draft: NewStatus) -> Result<Status, DomainError> {
        let now = Utc::now();
        let query = r#"
            INSERT INTO statuses (
                tailleur_id, files, description, duration, view_nb, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(draft.tailleur_id)
            .bind(&draft.files)
            .bind(&draft.description)
            .bind(&draft.duration)
            .bind(draft.view_nb)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create status: {}", e),
            })?;

        Ok(Status {
            id: result.last_insert_id() as i64,
            tailleur_id: draft.tailleur_id,
            files: draft.files,
            description: draft.description,
            duration: draft.duration,
            view_nb: draft.view_nb,
            created_at: now,
        })
    }
}
