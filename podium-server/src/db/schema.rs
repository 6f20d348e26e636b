//! Schema bootstrap
//!
//! Idempotent `IF NOT EXISTS` DDL for the four tables, run once at startup.
//! There is no versioning: this creates what is missing and never alters
//! what exists.

use sqlx::PgPool;

use crate::config::SchemaName;

/// Foreign key from `competition_sport` to `competitions`
pub(crate) const PAIRING_COMPETITION_FK: &str = "competition_sport_competition_fk";
/// Foreign key from `competition_sport` to `sports`
pub(crate) const PAIRING_SPORT_FK: &str = "competition_sport_sport_fk";
/// Foreign key from `stages` to `competition_sport`
pub(crate) const STAGE_PAIRING_FK: &str = "stages_competition_sport_fk";

/// DDL statements for `schema`, in dependency order.
pub fn statements(schema: &SchemaName) -> Vec<String> {
    let s = schema.as_str();
    vec![
        format!(r#"CREATE SCHEMA IF NOT EXISTS "{s}""#),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{s}".competitions (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL CHECK (title <> ''),
                date_of_start DATE,
                date_of_end DATE,
                CONSTRAINT competitions_date_range CHECK (
                    date_of_start IS NULL OR date_of_end IS NULL OR date_of_end >= date_of_start
                )
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{s}".sports (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL CHECK (title <> ''),
                description TEXT
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{s}".competition_sport (
                id BIGSERIAL PRIMARY KEY,
                competition_id BIGINT NOT NULL,
                sport_id BIGINT NOT NULL,
                CONSTRAINT {PAIRING_COMPETITION_FK} FOREIGN KEY (competition_id)
                    REFERENCES "{s}".competitions (id),
                CONSTRAINT {PAIRING_SPORT_FK} FOREIGN KEY (sport_id)
                    REFERENCES "{s}".sports (id),
                CONSTRAINT competition_sport_unique UNIQUE (competition_id, sport_id)
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{s}".stages (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL CHECK (title <> ''),
                date DATE,
                place TEXT,
                competition_sport_id BIGINT,
                created TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                modified TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT {STAGE_PAIRING_FK} FOREIGN KEY (competition_sport_id)
                    REFERENCES "{s}".competition_sport (id) ON DELETE SET NULL
            )
            "#
        ),
        format!(
            r#"CREATE INDEX IF NOT EXISTS competition_sport_sport_idx ON "{s}".competition_sport (sport_id)"#
        ),
        format!(
            r#"CREATE INDEX IF NOT EXISTS stages_competition_sport_idx ON "{s}".stages (competition_sport_id)"#
        ),
    ]
}

/// Create the schema and its tables if missing.
pub async fn bootstrap(pool: &PgPool, schema: &SchemaName) -> Result<(), sqlx::Error> {
    tracing::info!(schema = schema.as_str(), "Bootstrapping schema...");

    let mut tx = pool.begin().await?;
    for statement in statements(schema) {
        sqlx::query(&statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}

/// Drop the schema and everything in it.
pub async fn drop_schema(pool: &PgPool, schema: &SchemaName) -> Result<(), sqlx::Error> {
    let statement = format!(r#"DROP SCHEMA IF EXISTS "{}" CASCADE"#, schema.as_str());
    sqlx::query(&statement).execute(pool).await?;
    Ok(())
}
