//! Database connection pool management
//!
//! Connection pooling uses SQLx with MySQL, configured from the shared
//! [`DatabaseConfig`].

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use ch_core::errors::DomainError;
use ch_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "creating database connection pool"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .test_before_acquire(true)
        .connect(&config.url)
        .await
        .map_err(|e| {
            tracing::error!("failed to create database pool: {}", e);
            DomainError::Database {
                message: format!("Failed to create database pool: {}", e),
            }
        })?;

    tracing::info!("database connection pool created");
    Ok(pool)
}
