//! Stage repository
//!
//! Stages hang off a pairing, not off a competition or sport directly.
//! The pairing reference is optional and is nulled when the pairing goes.

use podium_core::aggregate::StageListing;
use podium_core::models::{RecordId, StageDraft};
use sqlx::{PgPool, Row};

use super::DbError;
use crate::db::error::foreign_key_violation;

/// Every stage with the titles its pairing resolves to.
///
/// All joins are outer: an unresolved pairing yields NULL titles, never a
/// missing stage.
const LIST_SQL: &str = r#"
    SELECT
        st.id,
        st.title,
        st.date,
        st.place,
        st.competition_sport_id,
        st.created,
        st.modified,
        c.title AS competition_title,
        s.title AS sport_title
    FROM stages st
    LEFT JOIN competition_sport cs ON cs.id = st.competition_sport_id
    LEFT JOIN competitions c ON c.id = cs.competition_id
    LEFT JOIN sports s ON s.id = cs.sport_id
    ORDER BY st.id
"#;

/// Stage repository
pub struct StageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_flat(&self) -> Result<Vec<StageListing>, DbError> {
        let fetched = sqlx::query(LIST_SQL).fetch_all(self.pool).await?;

        let listings = fetched
            .iter()
            .map(|r| {
                Ok(StageListing {
                    id: r.try_get("id")?,
                    title: r.try_get("title")?,
                    date: r.try_get("date")?,
                    place: r.try_get("place")?,
                    competition_sport_id: r.try_get("competition_sport_id")?,
                    competition_title: r.try_get("competition_title")?,
                    sport_title: r.try_get("sport_title")?,
                    created: r.try_get("created")?,
                    modified: r.try_get("modified")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(listings)
    }

    /// Insert a stage; `created` and `modified` default to now.
    pub async fn create(&self, draft: &StageDraft) -> Result<i64, DbError> {
        let result = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO stages (title, date, place, competition_sport_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.date)
        .bind(draft.place.as_deref())
        .bind(draft.competition_sport_id.map(RecordId::get))
        .fetch_one(self.pool)
        .await;

        match result {
            Ok((id,)) => Ok(id),
            Err(e) => Err(translate(e, draft)),
        }
    }

    /// Overwrite every column of a stage and bump `modified`.
    pub async fn update(&self, id: RecordId, draft: &StageDraft) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE stages
            SET title = $1,
                date = $2,
                place = $3,
                competition_sport_id = $4,
                modified = NOW()
            WHERE id = $5
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.date)
        .bind(draft.place.as_deref())
        .bind(draft.competition_sport_id.map(RecordId::get))
        .bind(id.get())
        .execute(self.pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(DbError::not_found("stage", id)),
            Ok(_) => Ok(()),
            Err(e) => Err(translate(e, draft)),
        }
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), DbError> {
        let affected = sqlx::query("DELETE FROM stages WHERE id = $1")
            .bind(id.get())
            .execute(self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("stage", id));
        }
        Ok(())
    }
}

/// A foreign key failure on stages can only mean an unknown pairing.
fn translate(err: sqlx::Error, draft: &StageDraft) -> DbError {
    match (foreign_key_violation(&err), draft.competition_sport_id) {
        (Some(_), Some(pairing)) => DbError::unknown_reference("competition_sport", pairing),
        _ => DbError::Sqlx(err),
    }
}
