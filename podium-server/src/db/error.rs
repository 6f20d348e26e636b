//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A foreign key pointed at a row that does not exist
    #[error("unknown {resource} '{id}'")]
    UnknownReference { resource: &'static str, id: String },

    #[error("conflict on {resource}: {reason}")]
    Conflict {
        resource: &'static str,
        reason: &'static str,
    },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unknown_reference(resource: &'static str, id: impl ToString) -> Self {
        Self::UnknownReference {
            resource,
            id: id.to_string(),
        }
    }
}

/// Name of the violated constraint when `err` is a foreign key violation.
pub(crate) fn foreign_key_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            Some(db.constraint().unwrap_or_default())
        }
        _ => None,
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
