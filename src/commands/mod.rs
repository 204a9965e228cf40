//! Command implementations for the club performance CLI

pub mod import;
pub mod ladder;
pub mod performance;
pub mod teams;

use std::path::Path;

use tracing::info;

use crate::ingest::Snapshot;
use crate::storage::{ClubDatabase, ClubStore};
use crate::Result;

/// Read and coerce a JSON snapshot export.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&contents)?;
    info!(
        path = %path.display(),
        teams = snapshot.team_seasons.len(),
        games = snapshot.games.len(),
        rejected_teams = snapshot.rejected_team_seasons,
        rejected_games = snapshot.rejected_games,
        "read snapshot"
    );
    Ok(snapshot)
}

/// The store a read command works from: a snapshot file when given,
/// otherwise the SQLite database.
pub fn open_store(snapshot: Option<&Path>, db_path: &Path) -> Result<Box<dyn ClubStore>> {
    match snapshot {
        Some(path) => Ok(Box::new(read_snapshot(path)?)),
        None => {
            info!(path = %db_path.display(), "opening database");
            Ok(Box::new(ClubDatabase::open(db_path)?))
        }
    }
}

/// `+2`, `0`, `-3`
pub fn format_goal_difference(gd: i64) -> String {
    if gd > 0 {
        format!("+{gd}")
    } else {
        gd.to_string()
    }
}

#[cfg(test)]
mod tests;
