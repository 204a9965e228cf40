//! Runtime settings resolved from CLI flags and environment variables.
//!
//! A flag always wins over its environment variable.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::models::ClubIdentity;
use crate::perf::DEFAULT_LADDER_TIMEOUT;
use crate::storage::ClubDatabase;
use crate::{
    ClubError, Result, CLUB_ENV_VAR, DB_PATH_ENV_VAR, LADDER_TIMEOUT_ENV_VAR, LADDER_URL_ENV_VAR,
};


#[derive(Debug, Clone)]
pub struct Settings {
    pub club: ClubIdentity,
    pub ladder_url: Option<String>,
    pub ladder_timeout: Duration,
    pub db_path: PathBuf,
}

impl Settings {
    pub fn resolve(
        club: Option<String>,
        ladder_url: Option<String>,
        db_path: Option<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            club: resolve_club(club)?,
            ladder_url: resolve_ladder_url(ladder_url),
            ladder_timeout: resolve_ladder_timeout(),
            db_path: resolve_db_path(db_path)?,
        })
    }

    /// The ladder endpoint, for commands that cannot run without one.
    pub fn require_ladder_url(&self) -> Result<&str> {
        self.ladder_url
            .as_deref()
            .ok_or_else(|| ClubError::MissingLadderUrl {
                env_var: LADDER_URL_ENV_VAR.to_string(),
            })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Club name from the flag, else `CLUB_PERF_CLUB`.
pub fn resolve_club(club: Option<String>) -> Result<ClubIdentity> {
    non_empty(club)
        .or_else(|| non_empty(std::env::var(CLUB_ENV_VAR).ok()))
        .map(ClubIdentity::new)
        .ok_or_else(|| ClubError::MissingClubName {
            env_var: CLUB_ENV_VAR.to_string(),
        })
}

pub fn resolve_ladder_url(url: Option<String>) -> Option<String> {
    non_empty(url).or_else(|| non_empty(std::env::var(LADDER_URL_ENV_VAR).ok()))
}

/// `CLUB_PERF_LADDER_TIMEOUT_SECS`, falling back to 15 seconds.
pub fn resolve_ladder_timeout() -> Duration {
    let Ok(raw) = std::env::var(LADDER_TIMEOUT_ENV_VAR) else {
        return DEFAULT_LADDER_TIMEOUT;
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            warn!(value = %raw, "invalid {}, using default", LADDER_TIMEOUT_ENV_VAR);
            DEFAULT_LADDER_TIMEOUT
        }
    }
}

pub fn resolve_db_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    if let Some(path) = non_empty(std::env::var(DB_PATH_ENV_VAR).ok()) {
        return Ok(PathBuf::from(path));
    }
    Ok(ClubDatabase::default_path()?)
}
