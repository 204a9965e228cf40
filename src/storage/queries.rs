//! Basic database query operations

use super::schema::ClubDatabase;
use crate::cli::types::{CompetitionId, FixtureId, GameId, TeamCategory, TeamSeasonId};
use crate::models::{
    club_key, team_season::sort_for_display, ClubIdentity, Game, GameStatus, Side, TeamSeason,
};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Row, Statement};
use std::time::{SystemTime, UNIX_EPOCH};

const DATE_FORMAT: &str = "%Y-%m-%d";

const UPSERT_TEAM_SEASON: &str = "INSERT OR REPLACE INTO team_seasons
     (id, club, club_key, name, competition_id, fixture_id, category, updated_at)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

const UPSERT_GAME: &str = "INSERT OR REPLACE INTO games
     (id, fixture_id, home_club, home_club_key, home_name, home_score,
      away_club, away_club_key, away_name, away_score, status, game_date, updated_at)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn now() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn insert_team_season(
    stmt: &mut Statement,
    club: &ClubIdentity,
    team: &TeamSeason,
    stamp: u64,
) -> rusqlite::Result<usize> {
    stmt.execute(params![
        team.id.as_str(),
        club.name(),
        club.key(),
        team.name,
        team.competition_id.map(|c| c.as_u32()),
        team.fixture_id.map(|f| f.as_u32()),
        team.category.as_str(),
        stamp
    ])
}

fn insert_game(stmt: &mut Statement, game: &Game, stamp: u64) -> rusqlite::Result<usize> {
    stmt.execute(params![
        game.id.as_str(),
        game.fixture_id.as_u32(),
        game.home.club_name,
        club_key(&game.home.club_name),
        game.home.name,
        game.home.score,
        game.away.club_name,
        club_key(&game.away.club_name),
        game.away.name,
        game.away.score,
        game.status.as_str(),
        game.date.map(|d| d.format(DATE_FORMAT).to_string()),
        stamp
    ])
}

fn team_season_from_row(row: &Row) -> rusqlite::Result<TeamSeason> {
    let category: String = row.get("category")?;
    Ok(TeamSeason {
        id: TeamSeasonId::new(row.get::<_, String>("id")?),
        name: row.get("name")?,
        competition_id: row.get::<_, Option<u32>>("competition_id")?.map(CompetitionId::new),
        fixture_id: row.get::<_, Option<u32>>("fixture_id")?.map(FixtureId::new),
        category: TeamCategory::from_store(&category),
    })
}

fn game_from_row(row: &Row) -> rusqlite::Result<Game> {
    let status: String = row.get("status")?;
    let date: Option<String> = row.get("game_date")?;
    Ok(Game {
        id: GameId::new(row.get::<_, String>("id")?),
        fixture_id: FixtureId::new(row.get("fixture_id")?),
        home: Side {
            club_name: row.get("home_club")?,
            name: row.get("home_name")?,
            score: row.get("home_score")?,
        },
        away: Side {
            club_name: row.get("away_club")?,
            name: row.get("away_name")?,
            score: row.get("away_score")?,
        },
        status: GameStatus::from_store(&status),
        date: date.and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok()),
    })
}

impl ClubDatabase {
    /// Insert or replace a team season belonging to `club`
    pub fn upsert_team_season(&mut self, club: &ClubIdentity, team: &TeamSeason) -> Result<()> {
        let stamp = now()?;
        let mut stmt = self.conn.prepare_cached(UPSERT_TEAM_SEASON)?;
        insert_team_season(&mut stmt, club, team, stamp)?;
        Ok(())
    }

    /// Insert or replace a game
    pub fn upsert_game(&mut self, game: &Game) -> Result<()> {
        let stamp = now()?;
        let mut stmt = self.conn.prepare_cached(UPSERT_GAME)?;
        insert_game(&mut stmt, game, stamp)?;
        Ok(())
    }

    /// Write a batch of team seasons and games in one transaction
    pub fn import(
        &mut self,
        club: &ClubIdentity,
        teams: &[TeamSeason],
        games: &[Game],
    ) -> Result<(usize, usize)> {
        let tx = self.conn.transaction()?;
        let stamp = now()?;
        {
            let mut team_stmt = tx.prepare(UPSERT_TEAM_SEASON)?;
            for team in teams {
                insert_team_season(&mut team_stmt, club, team, stamp)?;
            }

            let mut game_stmt = tx.prepare(UPSERT_GAME)?;
            for game in games {
                insert_game(&mut game_stmt, game, stamp)?;
            }
        }
        tx.commit()?;
        Ok((teams.len(), games.len()))
    }

    /// The club's team seasons, ordered by category then name
    pub fn team_seasons_for_club(&self, club: &ClubIdentity) -> Result<Vec<TeamSeason>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, competition_id, fixture_id, category
             FROM team_seasons
             WHERE club_key = ?1",
        )?;

        let mut teams = stmt
            .query_map(params![club.key()], team_season_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        sort_for_display(&mut teams);
        Ok(teams)
    }

    /// Completed games the club played in, oldest first (undated last)
    pub fn completed_games_for_club(&self, club: &ClubIdentity) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, fixture_id, home_club, home_name, home_score,
                    away_club, away_name, away_score, status, game_date
             FROM games
             WHERE status = ?2
               AND (home_club_key = ?1 OR away_club_key = ?1)
             ORDER BY game_date IS NULL, game_date, id",
        )?;

        let games = stmt
            .query_map(
                params![club.key(), GameStatus::Completed.as_str()],
                game_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(games)
    }

    /// Row counts: (team seasons, games)
    pub fn counts(&self) -> Result<(usize, usize)> {
        let teams: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM team_seasons", [], |r| r.get(0))?;
        let games: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM games", [], |r| r.get(0))?;
        Ok((teams as usize, games as usize))
    }

    /// Remove every team season and game
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM games", [])?;
        self.conn.execute("DELETE FROM team_seasons", [])?;
        Ok(())
    }
}
