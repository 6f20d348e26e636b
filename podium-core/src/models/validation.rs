//! Validation error types

use chrono::NaiveDate;
use thiserror::Error;

/// Validation error for user supplied input.
///
/// Every variant is detected before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent, null or blank
    #[error("Field {field} is required")]
    MissingField { field: &'static str },

    /// End date precedes start date
    #[error("Start date of competition can't be later than end date ({start} > {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Field exceeds maximum length
    #[error("Field {field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Field present but malformed
    #[error("Field {field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
