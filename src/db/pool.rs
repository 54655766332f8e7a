//! Database connection pool construction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Build the connection pool from configuration.
///
/// Called once at startup; the pool is then carried in `AppState` and
/// passed explicitly to everything that queries, so tests can construct
/// an isolated state around their own pool.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}
