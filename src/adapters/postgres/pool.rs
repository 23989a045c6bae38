//! Connection pool construction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a pool sized by the database configuration.
///
/// # Errors
///
/// - `DatabaseError` if no connection can be established
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to PostgreSQL", e))?;

    info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}
