//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Every connection has
//! its `search_path` pinned to the configured schema, so queries use bare
//! table names.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool and open the first connection.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        host = config.connect.get_host(),
        schema = config.schema.as_str(),
        max_connections = config.max_connections,
        "opening database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Create a pool that connects on first use.
///
/// Must be called from within a Tokio runtime.
pub fn create_lazy_pool(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemaName;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p podium-server -- --ignored

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        let config =
            DatabaseConfig::from_url("postgres://nobody@127.0.0.1:1/none", SchemaName::default())
                .unwrap();
        let pool = create_lazy_pool(&config);
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_uses_configured_schema() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DatabaseConfig::from_url(&url, SchemaName::new("podium_probe").unwrap()).unwrap();
        let pool = create_pool(&config).await.expect("pool creation failed");

        let (search_path,): (String,) = sqlx::query_as("SHOW search_path")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(search_path, "podium_probe");
    }
}
