//! Team category types.

use crate::error::ClubError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grade a club team plays in.
///
/// The store records this as free text ("Senior", "junior", "Midweek"...).
/// Anything unrecognised lands in [`TeamCategory::Other`] at ingestion, but
/// parsing from the command line is strict.
///
/// Variants are declared in display order, which is also the order team
/// lists are sorted by.
///
/// # Examples
///
/// ```rust
/// use club_perf::TeamCategory;
///
/// let cat: TeamCategory = "junior".parse().unwrap();
/// assert_eq!(cat, TeamCategory::Junior);
/// assert_eq!(cat.to_string(), "Junior");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamCategory {
    Senior,
    Junior,
    Midweek,
    Masters,
    Other,
}

impl TeamCategory {
    /// Lenient mapping used when reading store records.
    pub fn from_store(raw: &str) -> Self {
        raw.parse().unwrap_or(TeamCategory::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamCategory::Senior => "Senior",
            TeamCategory::Junior => "Junior",
            TeamCategory::Midweek => "Midweek",
            TeamCategory::Masters => "Masters",
            TeamCategory::Other => "Other",
        }
    }
}

impl fmt::Display for TeamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TeamCategory {
    type Err = ClubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "senior" | "seniors" => Ok(TeamCategory::Senior),
            "junior" | "juniors" => Ok(TeamCategory::Junior),
            "midweek" => Ok(TeamCategory::Midweek),
            "masters" => Ok(TeamCategory::Masters),
            "other" => Ok(TeamCategory::Other),
            _ => Err(ClubError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}
