//! API error types with IntoResponse
//!
//! Client errors carry a short plain-text message. Store failures are logged
//! and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use podium_core::ValidationError;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Body is not JSON or does not match the expected shape (400)
    MalformedBody { message: String },

    /// Referenced row does not exist (400)
    UnknownReference { resource: &'static str, id: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Write collides with existing data (409)
    Conflict {
        resource: &'static str,
        reason: &'static str,
    },

    /// Store failure (500, logged)
    Store(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody { .. } | Self::UnknownReference { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::MalformedBody { message } => message.clone(),
            Self::UnknownReference { resource, id } => format!("Unknown {} '{}'", resource, id),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Conflict { resource, reason } => format!("{}: {}", resource, reason),
            Self::Store(_) => "an internal error occurred".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(e) = &self {
            // Log the actual error, return generic message
            tracing::error!(error = %e, "store error");
        }

        (self.status(), self.message()).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::UnknownReference { resource, id } => Self::UnknownReference { resource, id },
            DbError::Conflict { resource, reason } => Self::Conflict { resource, reason },
            DbError::Sqlx(_) => Self::Store(e),
        }
    }
}
