//! Ingestion boundary between the loosely typed store documents and the
//! strict [`crate::models`] types.
//!
//! The scraper that fills the store has written ids and scores as numbers in
//! some seasons and as strings in others, and dates as ISO strings, epoch
//! numbers or `{seconds, nanoseconds}` timestamp objects. All of that is
//! coerced here exactly once. Records that cannot be coerced are rejected and
//! counted; a score that is not a number is treated as not yet entered.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::cli::types::{CompetitionId, FixtureId, GameId, TeamCategory, TeamSeasonId};
use crate::models::{Game, GameStatus, Side, TeamSeason};
use crate::Result;

#[cfg(test)]
mod tests;

/// Team season document as written by the scraper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamSeason {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "teamName")]
    pub name: Option<String>,
    #[serde(default, alias = "compID", alias = "competitionId", alias = "comp_id")]
    pub comp_id: Option<Value>,
    #[serde(default, alias = "fixtureID", alias = "fixture_id")]
    pub fixture_id: Option<Value>,
    #[serde(default, alias = "category")]
    pub r#type: Option<String>,
}

/// One side of a game document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSide {
    #[serde(default, alias = "clubName")]
    pub club: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
}

/// Game document as written by the scraper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "fixtureID", alias = "fixture_id")]
    pub fixture_id: Option<Value>,
    #[serde(default, alias = "home")]
    pub home_team: Option<RawSide>,
    #[serde(default, alias = "away")]
    pub away_team: Option<RawSide>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<Value>,
}

/// Coerce a number or numeric string into a non-negative integer.
pub fn loose_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u32)
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Coerce a string or number id into its string form.
pub fn loose_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convert the store's date representations into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, epoch seconds or milliseconds,
/// and `{seconds, nanoseconds}` objects (also with leading underscores).
pub fn loose_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.date_naive()))
        }
        Value::Number(n) => {
            let raw = n.as_i64()?;
            // Anything past the year 2286 in seconds is really milliseconds.
            let secs = if raw.abs() >= 10_000_000_000 {
                raw / 1000
            } else {
                raw
            };
            DateTime::from_timestamp(secs, 0).map(|d| d.date_naive())
        }
        Value::Object(map) => {
            let secs = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            DateTime::from_timestamp(secs, 0).map(|d| d.date_naive())
        }
        _ => None,
    }
}

impl RawTeamSeason {
    /// Strict form, or `None` when the record has no usable id.
    ///
    /// Missing or non-numeric competition/fixture ids do not reject the
    /// record; the team is still listed and tallied, it just cannot be
    /// looked up on the ladder.
    pub fn coerce(&self) -> Option<TeamSeason> {
        let id = self.id.as_ref().and_then(loose_id)?;
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(id.as_str())
            .to_string();

        Some(TeamSeason {
            id: TeamSeasonId::new(id),
            name,
            competition_id: self.comp_id.as_ref().and_then(loose_u32).map(CompetitionId::new),
            fixture_id: self.fixture_id.as_ref().and_then(loose_u32).map(FixtureId::new),
            category: self
                .r#type
                .as_deref()
                .map(TeamCategory::from_store)
                .unwrap_or(TeamCategory::Other),
        })
    }
}

impl RawSide {
    fn coerce(&self) -> Option<Side> {
        let clean = |s: &Option<String>| {
            s.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let name = clean(&self.name);
        let club_name = clean(&self.club).or_else(|| name.clone())?;

        Some(Side {
            name: name.unwrap_or_else(|| club_name.clone()),
            club_name,
            score: self.score.as_ref().and_then(loose_u32),
        })
    }
}

impl RawGame {
    /// Strict form, or `None` when the id, fixture id or either side is unusable.
    pub fn coerce(&self) -> Option<Game> {
        Some(Game {
            id: GameId::new(self.id.as_ref().and_then(loose_id)?),
            fixture_id: FixtureId::new(self.fixture_id.as_ref().and_then(loose_u32)?),
            home: self.home_team.as_ref()?.coerce()?,
            away: self.away_team.as_ref()?.coerce()?,
            status: self
                .status
                .as_deref()
                .map(GameStatus::from_store)
                .unwrap_or(GameStatus::Other),
            date: self.date.as_ref().and_then(loose_date),
        })
    }
}

/// Parse and coerce one team season document.
pub fn ingest_team_season(doc: &Value) -> Option<TeamSeason> {
    RawTeamSeason::deserialize(doc).ok()?.coerce()
}

/// Parse and coerce one game document.
pub fn ingest_game(doc: &Value) -> Option<Game> {
    RawGame::deserialize(doc).ok()?.coerce()
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    club: Option<String>,
    #[serde(default, alias = "teamSeasons")]
    teams: Vec<Value>,
    #[serde(default)]
    games: Vec<Value>,
}

/// A coerced export of the store: `{ "club": .., "teams": [..], "games": [..] }`.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub club: Option<String>,
    pub team_seasons: Vec<TeamSeason>,
    pub games: Vec<Game>,
    pub rejected_team_seasons: usize,
    pub rejected_games: usize,
}

impl Snapshot {
    /// Fails only when the document itself is not a snapshot object;
    /// individual bad records are counted and skipped.
    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(contents)?;
        let mut snapshot = Snapshot {
            club: raw.club.filter(|c| !c.trim().is_empty()),
            ..Snapshot::default()
        };

        for doc in &raw.teams {
            match ingest_team_season(doc) {
                Some(team) => snapshot.team_seasons.push(team),
                None => {
                    warn!(record = %doc, "rejected team season record");
                    snapshot.rejected_team_seasons += 1;
                }
            }
        }

        for doc in &raw.games {
            match ingest_game(doc) {
                Some(game) => snapshot.games.push(game),
                None => {
                    warn!(record = %doc, "rejected game record");
                    snapshot.rejected_games += 1;
                }
            }
        }

        Ok(snapshot)
    }
}
