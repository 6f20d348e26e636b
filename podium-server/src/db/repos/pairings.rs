//! Competition-sport association repository
//!
//! Both foreign keys are named in the schema, so a violation tells which
//! side of the pairing was unknown.

use podium_core::aggregate::PairingListing;
use podium_core::models::{PairingDraft, RecordId};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::error::{foreign_key_violation, is_unique_violation};
use crate::db::schema::{PAIRING_COMPETITION_FK, PAIRING_SPORT_FK};

#[derive(Debug, FromRow)]
struct PairingRow {
    id: i64,
    competition_id: i64,
    competition_title: String,
    sport_id: i64,
    sport_title: String,
}

impl From<PairingRow> for PairingListing {
    fn from(r: PairingRow) -> Self {
        Self {
            id: r.id,
            competition_id: r.competition_id,
            competition_title: r.competition_title,
            sport_id: r.sport_id,
            sport_title: r.sport_title,
        }
    }
}

/// Pairing repository
pub struct PairingRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PairingRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every pairing whose competition and sport both resolve (inner joins).
    pub async fn list(&self) -> Result<Vec<PairingListing>, DbError> {
        let rows: Vec<PairingRow> = sqlx::query_as(
            r#"
            SELECT
                cs.id,
                c.id    AS competition_id,
                c.title AS competition_title,
                s.id    AS sport_id,
                s.title AS sport_title
            FROM competition_sport cs
            JOIN competitions c ON c.id = cs.competition_id
            JOIN sports s ON s.id = cs.sport_id
            ORDER BY cs.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PairingListing::from).collect())
    }

    /// Link a sport into a competition.
    pub async fn create(&self, draft: PairingDraft) -> Result<i64, DbError> {
        let result = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO competition_sport (competition_id, sport_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(draft.competition_id.get())
        .bind(draft.sport_id.get())
        .fetch_one(self.pool)
        .await;

        match result {
            Ok((id,)) => Ok(id),
            Err(e) => Err(translate(e, draft)),
        }
    }

    /// Unlink; stages of the pairing keep existing with a NULL reference.
    pub async fn delete(&self, id: RecordId) -> Result<(), DbError> {
        let affected = sqlx::query("DELETE FROM competition_sport WHERE id = $1")
            .bind(id.get())
            .execute(self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("competition_sport", id));
        }
        Ok(())
    }
}

fn translate(err: sqlx::Error, draft: PairingDraft) -> DbError {
    if is_unique_violation(&err) {
        return DbError::Conflict {
            resource: "competition_sport",
            reason: "sport is already linked to this competition",
        };
    }

    match foreign_key_violation(&err) {
        Some(PAIRING_COMPETITION_FK) => {
            DbError::unknown_reference("competition", draft.competition_id)
        }
        Some(PAIRING_SPORT_FK) => DbError::unknown_reference("sport", draft.sport_id),
        _ => DbError::Sqlx(err),
    }
}
