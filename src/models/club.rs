//! Club identity used to orient game scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The home club whose perspective every tally is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubIdentity {
    name: String,
}

impl ClubIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalised form used for matching and for the stored lookup columns.
    pub fn key(&self) -> String {
        club_key(&self.name)
    }

    /// Case-insensitive match against a side's club name.
    pub fn matches(&self, club_name: &str) -> bool {
        club_key(club_name) == self.key()
    }
}

/// Trimmed, Unicode-lowercased club name.
pub fn club_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl fmt::Display for ClubIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
