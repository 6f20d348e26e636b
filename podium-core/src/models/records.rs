//! Rows as they come back from the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Competition row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    pub id: i64,
    pub title: String,
    pub date_of_start: Option<NaiveDate>,
    pub date_of_end: Option<NaiveDate>,
}

/// Sport row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Stage row, minus its pairing reference and audit timestamps.
///
/// This is the leaf of both nested views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
}
