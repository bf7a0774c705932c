//! MySQL implementation of the AccountRepository trait.
//!
//! The two balance mutations are single conditional `UPDATE` statements:
//! the database applies them atomically, which is what makes concurrent
//! ledger calls on the same account safe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;

use ch_core::domain::entities::account::{Account, Role};
use ch_core::errors::DomainError;
use ch_core::repositories::{AccountRepository, BalanceUpdate};

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let role_str: String = row
            .try_get("role")
            .map_err(|e| db_error(format!("Failed to get role: {}", e)))?;
        let role = Role::from_str(&role_str).map_err(db_error)?;

        Ok(Account {
            id: row
                .try_get("id")
                .map_err(|e| db_error(format!("Failed to get id: {}", e)))?,
            role,
            credit: row
                .try_get("credit")
                .map_err(|e| db_error(format!("Failed to get credit: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error(format!("Failed to get created_at: {}", e)))?,
        })
    }

    async fn read_balance(&self, id: i64) -> Result<Option<f64>, DomainError> {
        let row = sqlx::query("SELECT credit FROM comptes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(format!("Balance read failed: {}", e)))?;

        match row {
            Some(row) => {
                let credit: f64 = row
                    .try_get("credit")
                    .map_err(|e| db_error(format!("Failed to get credit: {}", e)))?;
                Ok(Some(credit))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, role, credit, created_at
            FROM comptes
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn add_credit(&self, id: i64, amount: f64) -> Result<Option<f64>, DomainError> {
        let result = sqlx::query("UPDATE comptes SET credit = credit + ? WHERE id = ?")
            .bind(amount)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(format!("Credit update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.read_balance(id).await
    }

    async fn debit_credit(&self, id: i64, amount: f64) -> Result<BalanceUpdate, DomainError> {
        // Conditional decrement: the WHERE clause is what makes two racing
        // debits for the same last units resolve to exactly one winner.
        let result =
            sqlx::query("UPDATE comptes SET credit = credit - ? WHERE id = ? AND credit >= ?")
                .bind(amount)
                .bind(id)
                .bind(amount)
                .execute(&self.pool)
                .await
                .map_err(|e| db_error(format!("Debit update failed: {}", e)))?;

        if result.rows_affected() == 1 {
            let new_balance = self
                .read_balance(id)
                .await?
                .ok_or_else(|| db_error("Account vanished after debit".to_string()))?;
            return Ok(BalanceUpdate::Applied { new_balance });
        }

        match self.read_balance(id).await? {
            Some(balance) => Ok(BalanceUpdate::InsufficientCredit { balance }),
            None => Ok(BalanceUpdate::AccountMissing),
        }
    }
}

fn db_error(message: String) -> DomainError {
    DomainError::Database { message }
}
