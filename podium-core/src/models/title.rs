//! Entity title validation

use super::ValidationError;

/// Maximum length for titles
const MAX_TITLE_LEN: usize = 256;

/// Validated title shared by competitions, sports and stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Create a title from an optional request field.
    ///
    /// # Rules
    /// - Present and non-empty after trimming whitespace
    /// - Max 256 characters
    ///
    /// # Example
    /// ```
    /// use podium_core::models::Title;
    ///
    /// assert!(Title::new(Some("Summer Games")).is_ok());
    /// assert!(Title::new(Some("   ")).is_err());
    /// assert!(Title::new(None).is_err());
    /// ```
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        let trimmed = s.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            return Err(ValidationError::missing("title"));
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
