//! Cascading delete through `competition_sport`

use podium_core::models::RecordId;
use sqlx::PgPool;

use super::DbError;

/// An entity whose rows are referenced by `competition_sport`
pub(crate) struct Cascade {
    pub resource: &'static str,
    pub unlink: &'static str,
    pub delete: &'static str,
}

pub(crate) const COMPETITION: Cascade = Cascade {
    resource: "competition",
    unlink: "DELETE FROM competition_sport WHERE competition_id = $1",
    delete: "DELETE FROM competitions WHERE id = $1",
};

pub(crate) const SPORT: Cascade = Cascade {
    resource: "sport",
    unlink: "DELETE FROM competition_sport WHERE sport_id = $1",
    delete: "DELETE FROM sports WHERE id = $1",
};

/// Remove every association row pointing at `id`, then the row itself.
///
/// Both statements share one transaction: either the entity and all its
/// associations are gone, or nothing changed. Stages on the removed
/// associations keep existing with a NULL reference.
pub(crate) async fn delete(pool: &PgPool, cascade: &Cascade, id: RecordId) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;

    let unlinked = sqlx::query(cascade.unlink)
        .bind(id.get())
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let deleted = sqlx::query(cascade.delete)
        .bind(id.get())
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        tx.rollback().await?;
        return Err(DbError::not_found(cascade.resource, id));
    }

    tx.commit().await?;
    tracing::info!(
        resource = cascade.resource,
        id = %id,
        associations = unlinked,
        "deleted with associations"
    );
    Ok(())
}
