//! podium-server: HTTP + Postgres service for competitions, sports and stages
//!
//! Read endpoints return nested views (`/competitions`, `/sports`) or flat
//! listings (`/stages`, `/competition_sport`); write endpoints validate,
//! then apply single-row mutations. Deleting a competition or a sport
//! removes its association rows in the same transaction.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod state;

pub use config::{DatabaseConfig, SchemaName};
pub use error::{Result, ServerError};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;

/// Open the pool and, unless told otherwise, bootstrap the schema.
pub async fn connect(database: &DatabaseConfig, init_schema: bool) -> Result<sqlx::PgPool> {
    let pool = db::create_pool(database).await?;

    if init_schema {
        db::schema::bootstrap(&pool, &database.schema).await?;
    }

    Ok(pool)
}
