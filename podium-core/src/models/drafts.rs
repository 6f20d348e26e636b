//! Validated write payloads, one per entity
//!
//! Drafts are what the store layer accepts for insert and update. Building
//! one is the only way to get past validation, so a repository never sees
//! a blank title or an inverted date range.

use chrono::NaiveDate;

use super::{DateRange, RecordId, Title, ValidationError};

/// Competition insert/update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionDraft {
    pub title: Title,
    pub dates: DateRange,
}

impl CompetitionDraft {
    pub fn new(
        title: Option<&str>,
        date_of_start: Option<NaiveDate>,
        date_of_end: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: Title::new(title)?,
            dates: DateRange::new(date_of_start, date_of_end)?,
        })
    }
}

/// Sport insert/update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportDraft {
    pub title: Title,
    pub description: Option<String>,
}

impl SportDraft {
    pub fn new(title: Option<&str>, description: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: Title::new(title)?,
            description,
        })
    }
}

/// Stage insert/update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDraft {
    pub title: Title,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
    pub competition_sport_id: Option<RecordId>,
}

impl StageDraft {
    /// The pairing reference is optional, but when present it must be a
    /// positive identifier.
    pub fn new(
        title: Option<&str>,
        date: Option<NaiveDate>,
        place: Option<String>,
        competition_sport_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let title = Title::new(title)?;
        let competition_sport_id = match competition_sport_id {
            None => None,
            Some(id) if id > 0 => Some(RecordId::new(Some(id), "competition_sport_id")?),
            Some(_) => {
                return Err(ValidationError::InvalidFormat {
                    field: "competition_sport_id",
                    reason: "must be a positive integer",
                })
            }
        };

        Ok(Self {
            title,
            date,
            place,
            competition_sport_id,
        })
    }
}

/// Competition-sport association insert payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingDraft {
    pub competition_id: RecordId,
    pub sport_id: RecordId,
}

impl PairingDraft {
    pub fn new(competition_id: Option<i64>, sport_id: Option<i64>) -> Result<Self, ValidationError> {
        Ok(Self {
            competition_id: RecordId::new(competition_id, "competition_id")?,
            sport_id: RecordId::new(sport_id, "sport_id")?,
        })
    }
}
