//! Ladder cache entries and their read-only status view.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::cli::types::{CompetitionId, FixtureId};
use crate::error::LadderError;

/// Key of one ladder lookup: (competition id, fixture id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LadderKey {
    pub competition: CompetitionId,
    pub fixture: FixtureId,
}

impl LadderKey {
    pub fn new(competition: CompetitionId, fixture: FixtureId) -> Self {
        Self {
            competition,
            fixture,
        }
    }
}

impl fmt::Display for LadderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.competition, self.fixture)
    }
}

/// A team's place on the ladder as reported by the lookup endpoint.
///
/// Either field may be absent, e.g. before the first round is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LadderStanding {
    pub position: Option<u32>,
    pub points: Option<u32>,
}

/// Cache slot for one [`LadderKey`].
///
/// Absent keys have no entry at all. `Loading` guards against a second
/// concurrent lookup; `Failed` is eligible for retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderEntry {
    Loading,
    Resolved(LadderStanding),
    Failed(LadderError),
}

impl LadderEntry {
    pub fn is_loading(&self) -> bool {
        matches!(self, LadderEntry::Loading)
    }

    /// Whether a fresh `ensure` should issue a lookup for this slot.
    pub fn needs_fetch(entry: Option<&LadderEntry>) -> bool {
        matches!(entry, None | Some(LadderEntry::Failed(_)))
    }

    pub fn status(&self) -> LadderStatus {
        match self {
            LadderEntry::Loading => LadderStatus {
                loading: true,
                ..LadderStatus::default()
            },
            LadderEntry::Resolved(standing) => LadderStatus {
                position: standing.position,
                points: standing.points,
                loading: false,
                error: None,
            },
            LadderEntry::Failed(err) => LadderStatus::failed(err.clone()),
        }
    }
}

/// Flattened `{position, points, loading, error}` view for one row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LadderStatus {
    pub position: Option<u32>,
    pub points: Option<u32>,
    pub loading: bool,
    #[serde(rename = "ladder_error", serialize_with = "serialize_error")]
    pub error: Option<LadderError>,
}

impl LadderStatus {
    pub fn failed(error: LadderError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn missing_identifiers() -> Self {
        Self::failed(LadderError::MissingIdentifiers)
    }
}

fn serialize_error<S>(error: &Option<LadderError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
