//! Nested read views over the competition / sport / stage graph
//!
//! The store hands back one flat row per
//! `root ⟕ competition_sport ⟕ branch ⟕ stages` combination. Nesting is done
//! in two phases:
//!
//! 1. stages are grouped per pairing (`competition_sport.id`), never per
//!    sport or per competition alone;
//! 2. the pairings are grouped under their root.
//!
//! Grouping at pairing granularity first is what keeps the stages of
//! "Swimming at Cup A" out of "Swimming at Cup B". A root without pairings
//! and a pairing without stages both come out as empty sequences.

pub mod views;

use std::collections::{HashMap, HashSet};

use crate::models::{CompetitionRecord, SportRecord, StageRecord};

pub use views::{CompetitionBranch, CompetitionTree, PairingListing, SportBranch, SportTree, StageListing};

/// Anything with a primary key
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for CompetitionRecord {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for SportRecord {
    fn key(&self) -> i64 {
        self.id
    }
}

/// One row of the flat left-join fetch.
///
/// `pairing_id`, `branch` and `stage` are `None` when the corresponding
/// outer join found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow<R, B> {
    pub root: R,
    pub pairing_id: Option<i64>,
    pub branch: Option<B>,
    pub stage: Option<StageRecord>,
}

/// Stages of one (competition, sport) pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing<B> {
    pub id: i64,
    pub branch: B,
    pub stages: Vec<StageRecord>,
}

/// A root entity with its pairings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rooted<R, B> {
    pub root: R,
    pub pairings: Vec<Pairing<B>>,
}

/// Fold flat joined rows into root → pairing → stages.
///
/// Roots are ordered by key, pairings by pairing id and stages by stage id,
/// whatever order the rows arrive in. A pairing whose branch did not resolve
/// is dropped; its root is still emitted.
pub fn nest<R, B, I>(rows: I) -> Vec<Rooted<R, B>>
where
    R: Keyed,
    I: IntoIterator<Item = JoinedRow<R, B>>,
{
    let mut roots: Vec<R> = Vec::new();
    let mut root_slots: HashMap<i64, usize> = HashMap::new();

    // (root slot, pairing) in first-seen order
    let mut pairings: Vec<(usize, Pairing<B>)> = Vec::new();
    let mut pairing_slots: HashMap<i64, usize> = HashMap::new();
    let mut seen_stages: HashSet<(i64, i64)> = HashSet::new();

    for JoinedRow {
        root,
        pairing_id,
        branch,
        stage,
    } in rows
    {
        let root_slot = *root_slots.entry(root.key()).or_insert_with(|| {
            roots.push(root);
            roots.len() - 1
        });

        let (Some(pairing_id), Some(branch)) = (pairing_id, branch) else {
            if let Some(pairing_id) = pairing_id {
                tracing::debug!(pairing_id, "pairing with unresolved side skipped");
            }
            continue;
        };

        let pairing_slot = *pairing_slots.entry(pairing_id).or_insert_with(|| {
            pairings.push((
                root_slot,
                Pairing {
                    id: pairing_id,
                    branch,
                    stages: Vec::new(),
                },
            ));
            pairings.len() - 1
        });

        if let Some(stage) = stage {
            if seen_stages.insert((pairing_id, stage.id)) {
                pairings[pairing_slot].1.stages.push(stage);
            }
        }
    }

    let mut nested: Vec<Rooted<R, B>> = roots
        .into_iter()
        .map(|root| Rooted {
            root,
            pairings: Vec::new(),
        })
        .collect();

    for (slot, mut pairing) in pairings {
        pairing.stages.sort_by_key(|s| s.id);
        nested[slot].pairings.push(pairing);
    }

    for rooted in &mut nested {
        rooted.pairings.sort_by_key(|p| p.id);
    }
    nested.sort_by_key(|r| r.root.key());
    nested
}

/// `/competitions`: competition → sports → stages
pub fn competitions_view<I>(rows: I) -> Vec<CompetitionTree>
where
    I: IntoIterator<Item = JoinedRow<CompetitionRecord, SportRecord>>,
{
    nest(rows).into_iter().map(CompetitionTree::from).collect()
}

/// `/sports`: sport → competitions → stages
pub fn sports_view<I>(rows: I) -> Vec<SportTree>
where
    I: IntoIterator<Item = JoinedRow<SportRecord, CompetitionRecord>>,
{
    nest(rows).into_iter().map(SportTree::from).collect()
}
