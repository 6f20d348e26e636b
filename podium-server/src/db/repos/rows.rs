//! Column mapping shared by the joined queries
//!
//! Joined queries alias columns by table: `competition_*`, `sport_*`,
//! `stage_*`, plus `pairing_id` for `competition_sport.id`.

use podium_core::models::{CompetitionRecord, SportRecord, StageRecord};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub(crate) fn competition(row: &PgRow) -> Result<CompetitionRecord, sqlx::Error> {
    Ok(CompetitionRecord {
        id: row.try_get("competition_id")?,
        title: row.try_get("competition_title")?,
        date_of_start: row.try_get("competition_date_of_start")?,
        date_of_end: row.try_get("competition_date_of_end")?,
    })
}

pub(crate) fn sport(row: &PgRow) -> Result<SportRecord, sqlx::Error> {
    Ok(SportRecord {
        id: row.try_get("sport_id")?,
        title: row.try_get("sport_title")?,
        description: row.try_get("sport_description")?,
    })
}

pub(crate) fn stage(row: &PgRow) -> Result<StageRecord, sqlx::Error> {
    Ok(StageRecord {
        id: row.try_get("stage_id")?,
        title: row.try_get("stage_title")?,
        date: row.try_get("stage_date")?,
        place: row.try_get("stage_place")?,
    })
}

/// Outer-joined side of a row: `None` when `key_column` is NULL.
pub(crate) fn outer<T>(
    row: &PgRow,
    key_column: &str,
    map: fn(&PgRow) -> Result<T, sqlx::Error>,
) -> Result<Option<T>, sqlx::Error> {
    match row.try_get::<Option<i64>, _>(key_column)? {
        Some(_) => map(row).map(Some),
        None => Ok(None),
    }
}
