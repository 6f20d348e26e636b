//! Serializable read models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Rooted;
use crate::models::{CompetitionRecord, SportRecord, StageRecord};

/// Competition with its sports and, per sport, the stages held in this
/// competition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionTree {
    pub id: i64,
    pub title: String,
    pub date_of_start: Option<NaiveDate>,
    pub date_of_end: Option<NaiveDate>,
    pub sports: Vec<SportBranch>,
}

/// Sport as seen from inside one competition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportBranch {
    pub competition_sport_id: i64,
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub stages: Vec<StageRecord>,
}

/// Sport with the competitions it is contested in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportTree {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub competitions: Vec<CompetitionBranch>,
}

/// Competition as seen from inside one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionBranch {
    pub competition_sport_id: i64,
    pub id: i64,
    pub title: String,
    pub date_of_start: Option<NaiveDate>,
    pub date_of_end: Option<NaiveDate>,
    pub stages: Vec<StageRecord>,
}

impl From<Rooted<CompetitionRecord, SportRecord>> for CompetitionTree {
    fn from(r: Rooted<CompetitionRecord, SportRecord>) -> Self {
        Self {
            id: r.root.id,
            title: r.root.title,
            date_of_start: r.root.date_of_start,
            date_of_end: r.root.date_of_end,
            sports: r
                .pairings
                .into_iter()
                .map(|p| SportBranch {
                    competition_sport_id: p.id,
                    id: p.branch.id,
                    title: p.branch.title,
                    description: p.branch.description,
                    stages: p.stages,
                })
                .collect(),
        }
    }
}

impl From<Rooted<SportRecord, CompetitionRecord>> for SportTree {
    fn from(r: Rooted<SportRecord, CompetitionRecord>) -> Self {
        Self {
            id: r.root.id,
            title: r.root.title,
            description: r.root.description,
            competitions: r
                .pairings
                .into_iter()
                .map(|p| CompetitionBranch {
                    competition_sport_id: p.id,
                    id: p.branch.id,
                    title: p.branch.title,
                    date_of_start: p.branch.date_of_start,
                    date_of_end: p.branch.date_of_end,
                    stages: p.stages,
                })
                .collect(),
        }
    }
}

/// `/stages` row: a stage with the titles its pairing resolves to.
///
/// The titles are `None` when the stage has no pairing or the pairing no
/// longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageListing {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
    pub competition_sport_id: Option<i64>,
    pub competition_title: Option<String>,
    pub sport_title: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// `/competition_sport` row. Both sides always resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingListing {
    pub id: i64,
    pub competition_id: i64,
    pub competition_title: String,
    pub sport_id: i64,
    pub sport_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{competitions_view, sports_view, JoinedRow};
    use serde_json::json;

    #[test]
    fn empty_sequences_serialize_as_arrays() {
        let competitions = competitions_view(vec![JoinedRow {
            root: CompetitionRecord {
                id: 1,
                title: "Open".into(),
                date_of_start: NaiveDate::from_ymd_opt(2024, 6, 1),
                date_of_end: None,
            },
            pairing_id: None,
            branch: None::<SportRecord>,
            stage: None,
        }]);

        assert_eq!(
            serde_json::to_value(&competitions).unwrap(),
            json!([{
                "id": 1,
                "title": "Open",
                "date_of_start": "2024-06-01",
                "date_of_end": null,
                "sports": []
            }])
        );
    }

    #[test]
    fn sport_tree_shape() {
        let sports = sports_view(vec![JoinedRow {
            root: SportRecord {
                id: 3,
                title: "Judo".into(),
                description: Some("mat".into()),
            },
            pairing_id: Some(9),
            branch: Some(CompetitionRecord {
                id: 1,
                title: "Open".into(),
                date_of_start: None,
                date_of_end: None,
            }),
            stage: None,
        }]);

        let value = serde_json::to_value(&sports).unwrap();
        assert_eq!(value[0]["competitions"][0]["competition_sport_id"], 9);
        assert_eq!(value[0]["competitions"][0]["stages"], json!([]));
    }
}
