//! Primary key input

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Validated, strictly positive row identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Validate an identifier taken from the request field `field`.
    ///
    /// Absent and zero are both treated as missing.
    pub fn new(raw: Option<i64>, field: &'static str) -> Result<Self, ValidationError> {
        match raw {
            None | Some(0) => Err(ValidationError::missing(field)),
            Some(id) if id < 0 => Err(ValidationError::InvalidFormat {
                field,
                reason: "must be a positive integer",
            }),
            Some(id) => Ok(Self(id)),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert_eq!(RecordId::new(Some(42), "id").unwrap().get(), 42);
    }

    #[test]
    fn absent_or_zero_is_missing() {
        assert_eq!(
            RecordId::new(None, "id").unwrap_err(),
            ValidationError::MissingField { field: "id" }
        );
        assert_eq!(
            RecordId::new(Some(0), "sport_id").unwrap_err(),
            ValidationError::MissingField { field: "sport_id" }
        );
    }

    #[test]
    fn negative_is_malformed() {
        assert!(matches!(
            RecordId::new(Some(-3), "id").unwrap_err(),
            ValidationError::InvalidFormat { field: "id", .. }
        ));
    }
}
