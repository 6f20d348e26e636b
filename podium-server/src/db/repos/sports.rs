//! Sport repository
//!
//! Mirror of the competition repository, rooted at sports.

use podium_core::aggregate::{sports_view, JoinedRow, SportTree};
use podium_core::models::{RecordId, SportDraft};
use sqlx::{PgPool, Row};

use super::{cascade, rows, DbError};

/// Sports ⟕ pairings ⟕ competitions ⟕ stages, stages joined per pairing.
const NESTED_SQL: &str = r#"
    SELECT
        s.id            AS sport_id,
        s.title         AS sport_title,
        s.description   AS sport_description,
        cs.id           AS pairing_id,
        c.id            AS competition_id,
        c.title         AS competition_title,
        c.date_of_start AS competition_date_of_start,
        c.date_of_end   AS competition_date_of_end,
        st.id           AS stage_id,
        st.title        AS stage_title,
        st.date         AS stage_date,
        st.place        AS stage_place
    FROM sports s
    LEFT JOIN competition_sport cs ON cs.sport_id = s.id
    LEFT JOIN competitions c ON c.id = cs.competition_id
    LEFT JOIN stages st ON st.competition_sport_id = cs.id
    ORDER BY s.id, cs.id, st.id
"#;

/// Sport repository
pub struct SportRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SportRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All sports with the competitions they appear in and per-pairing stages.
    pub async fn list_nested(&self) -> Result<Vec<SportTree>, DbError> {
        let fetched = sqlx::query(NESTED_SQL).fetch_all(self.pool).await?;

        let joined = fetched
            .iter()
            .map(|r| {
                Ok(JoinedRow {
                    root: rows::sport(r)?,
                    pairing_id: r.try_get("pairing_id")?,
                    branch: rows::outer(r, "competition_id", rows::competition)?,
                    stage: rows::outer(r, "stage_id", rows::stage)?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(sports_view(joined))
    }

    pub async fn create(&self, draft: &SportDraft) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO sports (title, description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.description.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: RecordId, draft: &SportDraft) -> Result<(), DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE sports
            SET title = $1, description = $2
            WHERE id = $3
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.description.as_deref())
        .bind(id.get())
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("sport", id));
        }
        Ok(())
    }

    /// Delete a sport and every association row referencing it.
    pub async fn delete(&self, id: RecordId) -> Result<(), DbError> {
        cascade::delete(self.pool, &cascade::SPORT, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_join_on_pairing() {
        assert!(NESTED_SQL.contains("st.competition_sport_id = cs.id"));
        assert_eq!(NESTED_SQL.matches("LEFT JOIN").count(), 3);
    }
}
