//! Database schema and connection management

use anyhow::{anyhow, Context, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// SQLite-backed copy of the club's team seasons and games
pub struct ClubDatabase {
    pub(crate) conn: Connection,
}

impl ClubDatabase {
    /// Open (creating if needed) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let conn =
            Connection::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests and one-off imports
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `<data dir>/club-perf/club.db`
    pub fn default_path() -> Result<PathBuf> {
        let base = data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
        Ok(base.join("club-perf").join("club.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_seasons (
                id TEXT PRIMARY KEY,
                club TEXT NOT NULL,
                club_key TEXT NOT NULL,
                name TEXT NOT NULL,
                competition_id INTEGER,
                fixture_id INTEGER,
                category TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                id TEXT PRIMARY KEY,
                fixture_id INTEGER NOT NULL,
                home_club TEXT NOT NULL,
                home_club_key TEXT NOT NULL,
                home_name TEXT NOT NULL,
                home_score INTEGER,
                away_club TEXT NOT NULL,
                away_club_key TEXT NOT NULL,
                away_name TEXT NOT NULL,
                away_score INTEGER,
                status TEXT NOT NULL,
                game_date TEXT,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_seasons_club
             ON team_seasons(club_key)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_fixture_status
             ON games(fixture_id, status)",
            [],
        )?;

        Ok(())
    }
}
