//! Competition repository
//!
//! - list: one LEFT JOIN over all four tables, nested per pairing in memory
//! - delete: association rows and the competition in one transaction

use podium_core::aggregate::{competitions_view, CompetitionTree, JoinedRow};
use podium_core::models::{CompetitionDraft, RecordId};
use sqlx::{PgPool, Row};

use super::{cascade, rows, DbError};

/// Competitions ⟕ pairings ⟕ sports ⟕ stages.
///
/// Stages join on the pairing id, never on the sport, so a stage only
/// ever lands under the competition its pairing belongs to.
const NESTED_SQL: &str = r#"
    SELECT
        c.id            AS competition_id,
        c.title         AS competition_title,
        c.date_of_start AS competition_date_of_start,
        c.date_of_end   AS competition_date_of_end,
        cs.id           AS pairing_id,
        s.id            AS sport_id,
        s.title         AS sport_title,
        s.description   AS sport_description,
        st.id           AS stage_id,
        st.title        AS stage_title,
        st.date         AS stage_date,
        st.place        AS stage_place
    FROM competitions c
    LEFT JOIN competition_sport cs ON cs.competition_id = c.id
    LEFT JOIN sports s ON s.id = cs.sport_id
    LEFT JOIN stages st ON st.competition_sport_id = cs.id
    ORDER BY c.id, cs.id, st.id
"#;

/// Competition repository
pub struct CompetitionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All competitions with their sports and per-pairing stages.
    pub async fn list_nested(&self) -> Result<Vec<CompetitionTree>, DbError> {
        let fetched = sqlx::query(NESTED_SQL).fetch_all(self.pool).await?;

        let joined = fetched
            .iter()
            .map(|r| {
                Ok(JoinedRow {
                    root: rows::competition(r)?,
                    pairing_id: r.try_get("pairing_id")?,
                    branch: rows::outer(r, "sport_id", rows::sport)?,
                    stage: rows::outer(r, "stage_id", rows::stage)?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(competitions_view(joined))
    }

    /// Insert a competition, returning its generated id.
    pub async fn create(&self, draft: &CompetitionDraft) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO competitions (title, date_of_start, date_of_end)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.dates.start())
        .bind(draft.dates.end())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite title and dates of an existing competition.
    pub async fn update(&self, id: RecordId, draft: &CompetitionDraft) -> Result<(), DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE competitions
            SET title = $1, date_of_start = $2, date_of_end = $3
            WHERE id = $4
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.dates.start())
        .bind(draft.dates.end())
        .bind(id.get())
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("competition", id));
        }
        Ok(())
    }

    /// Delete a competition and every association row referencing it.
    pub async fn delete(&self, id: RecordId) -> Result<(), DbError> {
        cascade::delete(self.pool, &cascade::COMPETITION, id).await
    }
}
