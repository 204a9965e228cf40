//! Storage layer for club team seasons and games
//!
//! This module provides the read side the performance session needs and a
//! SQLite copy of the store:
//! - `schema`: Database connection and schema management
//! - `queries`: Upserts, imports and the club-scoped reads

pub mod queries;
pub mod schema;


pub use schema::ClubDatabase;

use crate::ingest::Snapshot;
use crate::models::{ClubIdentity, Game, TeamSeason};
use crate::Result;

/// The two queries a performance session is built from.
pub trait ClubStore {
    /// Team seasons belonging to the club.
    fn load_team_seasons(&self, club: &ClubIdentity) -> Result<Vec<TeamSeason>>;

    /// Completed games in which the club is one of the sides.
    fn load_completed_games(&self, club: &ClubIdentity) -> Result<Vec<Game>>;
}

impl ClubStore for ClubDatabase {
    fn load_team_seasons(&self, club: &ClubIdentity) -> Result<Vec<TeamSeason>> {
        Ok(self.team_seasons_for_club(club)?)
    }

    fn load_completed_games(&self, club: &ClubIdentity) -> Result<Vec<Game>> {
        Ok(self.completed_games_for_club(club)?)
    }
}

/// A snapshot export is a single club's data, so every team season in it
/// belongs to the club; games are still filtered.
impl ClubStore for Snapshot {
    fn load_team_seasons(&self, _club: &ClubIdentity) -> Result<Vec<TeamSeason>> {
        let mut teams = self.team_seasons.clone();
        crate::models::team_season::sort_for_display(&mut teams);
        Ok(teams)
    }

    fn load_completed_games(&self, club: &ClubIdentity) -> Result<Vec<Game>> {
        Ok(self
            .games
            .iter()
            .filter(|g| g.is_completed())
            .filter(|g| club.matches(&g.home.club_name) || club.matches(&g.away.club_name))
            .cloned()
            .collect())
    }
}
