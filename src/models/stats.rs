//! Derived performance statistics.
//!
//! None of these are persisted. Goal difference in particular is never a
//! field: it is always `goals_for - goals_against`, computed on read.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::LadderStatus;
use crate::cli::types::{TeamCategory, TeamSeasonId};

/// Win/draw/loss and goal tally for one or more team seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed game from the club's perspective.
    ///
    /// Counters saturate at `u32::MAX` instead of overflowing.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.games_played = self.games_played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);

        let outcome = match goals_for.cmp(&goals_against) {
            Ordering::Greater => &mut self.wins,
            Ordering::Equal => &mut self.draws,
            Ordering::Less => &mut self.losses,
        };
        *outcome = outcome.saturating_add(1);
    }

    /// Field-wise sum with another tally.
    pub fn absorb(&mut self, other: &Tally) {
        self.games_played = self.games_played.saturating_add(other.games_played);
        self.wins = self.wins.saturating_add(other.wins);
        self.draws = self.draws.saturating_add(other.draws);
        self.losses = self.losses.saturating_add(other.losses);
        self.goals_for = self.goals_for.saturating_add(other.goals_for);
        self.goals_against = self.goals_against.saturating_add(other.goals_against);
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

impl Serialize for Tally {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Tally", 7)?;
        s.serialize_field("games_played", &self.games_played)?;
        s.serialize_field("wins", &self.wins)?;
        s.serialize_field("draws", &self.draws)?;
        s.serialize_field("losses", &self.losses)?;
        s.serialize_field("gf", &self.goals_for)?;
        s.serialize_field("ga", &self.goals_against)?;
        s.serialize_field("gd", &self.goal_difference())?;
        s.end()
    }
}

/// Club-wide sum across the selected team seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregateStats {
    /// Number of selected team seasons that went into the sum.
    pub teams: usize,
    #[serde(flatten)]
    pub tally: Tally,
}

/// Per-team-season tally plus the team's current ladder status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualStats {
    pub id: TeamSeasonId,
    pub name: String,
    pub category: TeamCategory,
    #[serde(flatten)]
    pub tally: Tally,
    #[serde(flatten)]
    pub ladder: LadderStatus,
}

/// Output of one reduction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PerformanceReport {
    pub aggregate: AggregateStats,
    pub individual: BTreeMap<TeamSeasonId, IndividualStats>,
}

impl PerformanceReport {
    /// Rows in display order: category, then name.
    pub fn rows(&self) -> Vec<&IndividualStats> {
        let mut rows: Vec<_> = self.individual.values().collect();
        rows.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        rows
    }
}
