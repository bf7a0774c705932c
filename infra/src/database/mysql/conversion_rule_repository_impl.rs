//! MySQL implementation of the ConversionRuleRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ch_core::domain::entities::conversion_rule::ConversionRule;
use ch_core::errors::DomainError;
use ch_core::repositories::ConversionRuleRepository;

/// MySQL implementation of ConversionRuleRepository
///
/// The history is append-only; the rule in force is simply the newest row.
pub struct MySqlConversionRuleRepository {
    pool: MySqlPool,
}

impl MySqlConversionRuleRepository {
    /// Create a new MySQL conversion rule repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversionRuleRepository for MySqlConversionRuleRepository {
    async fn find_current(&self) -> Result<Option<ConversionRule>, DomainError> {
        let query = r#"
            SELECT id, credit, prix, created_at
            FROM conversion_credits
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Conversion rule query failed: {}", e),
            })?;

        let Some(row) = result else {
            return Ok(None);
        };

        Ok(Some(ConversionRule {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            credit: row.try_get("credit").map_err(|e| DomainError::Database {
                message: format!("Failed to get credit: {}", e),
            })?,
            price: row.try_get("prix").map_err(|e| DomainError::Database {
                message: format!("Failed to get prix: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        }))
    }
}
