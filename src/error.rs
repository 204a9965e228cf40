//! Error types for the club performance library

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ClubError>;

#[derive(Error, Debug)]
pub enum ClubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Club name not provided and {env_var} environment variable not set")]
    MissingClubName { env_var: String },

    #[error("Ladder endpoint not provided and {env_var} environment variable not set")]
    MissingLadderUrl { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid team category: {category}")]
    InvalidCategory { category: String },

    #[error("Team season not found: {id}")]
    TeamSeasonNotFound { id: String },

    #[error("Store returned no team seasons for club {club}")]
    NoTeamSeasons { club: String },

    #[error("Ladder lookup failed: {0}")]
    Ladder(#[from] LadderError),
}

/// Failure of a single ladder lookup.
///
/// Stored inside the ladder cache rather than propagated, so it carries
/// owned messages and is cheap to clone into per-row status views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    #[error("missing identifiers")]
    MissingIdentifiers,

    #[error("timeout")]
    Timeout,

    #[error("ladder lookups disabled")]
    Disabled,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("upstream error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for LadderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LadderError::Timeout
        } else if err.is_decode() {
            LadderError::Malformed(err.to_string())
        } else {
            LadderError::Transport(err.to_string())
        }
    }
}
