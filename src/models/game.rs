//! Game records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClubIdentity;
use crate::cli::types::{FixtureId, GameId};

/// Completion state of a game as recorded by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Completed,
    Scheduled,
    /// Forfeits, washouts, postponements and anything else unrecognised.
    Other,
}

impl GameStatus {
    pub fn from_store(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "completed" | "complete" | "final" | "played" => GameStatus::Completed,
            "scheduled" | "upcoming" | "pending" => GameStatus::Scheduled,
            _ => GameStatus::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Completed => "completed",
            GameStatus::Scheduled => "scheduled",
            GameStatus::Other => "other",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One side of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    /// Club the side belongs to; matched against [`ClubIdentity`].
    pub club_name: String,
    /// Team display name, e.g. "Mentone Men's Premier League".
    pub name: String,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub fixture_id: FixtureId,
    pub home: Side,
    pub away: Side,
    pub status: GameStatus,
    pub date: Option<NaiveDate>,
}

impl Game {
    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    /// Both scores, or `None` while either is still missing.
    pub fn scores(&self) -> Option<(u32, u32)> {
        Some((self.home.score?, self.away.score?))
    }

    /// Goals (for, against) from the club's point of view.
    ///
    /// Returns `None` when scores are incomplete or neither side is the club.
    /// If both sides match (an intra-club game) the home side wins the tie.
    pub fn club_goals(&self, club: &ClubIdentity) -> Option<(u32, u32)> {
        let (home, away) = self.scores()?;
        if club.matches(&self.home.club_name) {
            Some((home, away))
        } else if club.matches(&self.away.club_name) {
            Some((away, home))
        } else {
            None
        }
    }
}
