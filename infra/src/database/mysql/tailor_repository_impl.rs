//! MySQL implementation of the TailorRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ch_core::domain::entities::tailor::Tailor;
use ch_core::errors::DomainError;
use ch_core::repositories::TailorRepository;

/// MySQL implementation of TailorRepository
pub struct MySqlTailorRepository {
    pool: MySqlPool,
}

impl MySqlTailorRepository {
    /// Create a new MySQL tailor repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TailorRepository for MySqlTailorRepository {
    async fn find_by_compte_id(&self, compte_id: i64) -> Result<Option<Tailor>, DomainError> {
        let result = sqlx::query("SELECT id, compte_id FROM tailleurs WHERE compte_id = ? LIMIT 1")
            .bind(compte_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Tailor {
                id: row.try_get("id").map_err(|e| DomainError::Database {
                    message: format!("Failed to get id: {}", e),
                })?,
                compte_id: row.try_get("compte_id").map_err(|e| DomainError::Database {
                    message: format!("Failed to get compte_id: {}", e),
                })?,
            })),
            None => Ok(None),
        }
    }
}
