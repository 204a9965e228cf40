//! Snapshot import command implementation

use std::path::PathBuf;

use tracing::info;

use crate::{
    commands::read_snapshot,
    config::{resolve_club, resolve_db_path},
    storage::ClubDatabase,
    Result,
};

/// Handle the import command
pub fn handle_import(
    file: PathBuf,
    club: Option<String>,
    db: Option<PathBuf>,
    clear: bool,
) -> Result<()> {
    let snapshot = read_snapshot(&file)?;
    let club = resolve_club(club.or_else(|| snapshot.club.clone()))?;
    let db_path = resolve_db_path(db)?;

    let mut db = ClubDatabase::open(&db_path)?;
    if clear {
        info!(path = %db_path.display(), "clearing database");
        db.clear()?;
    }

    let (teams, games) = db.import(&club, &snapshot.team_seasons, &snapshot.games)?;

    println!(
        "✓ Imported {} team seasons and {} games for {} into {}",
        teams,
        games,
        club,
        db_path.display()
    );
    if snapshot.rejected_team_seasons > 0 || snapshot.rejected_games > 0 {
        println!(
            "  Skipped {} team season and {} game records that could not be read",
            snapshot.rejected_team_seasons, snapshot.rejected_games
        );
    }

    Ok(())
}
