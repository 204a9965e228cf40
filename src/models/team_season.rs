//! Team season records.

use serde::{Deserialize, Serialize};

use super::LadderKey;
use crate::cli::types::{CompetitionId, FixtureId, TeamCategory, TeamSeasonId};

/// One team's participation in one competition round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeason {
    pub id: TeamSeasonId,
    pub name: String,
    pub competition_id: Option<CompetitionId>,
    pub fixture_id: Option<FixtureId>,
    pub category: TeamCategory,
}

impl TeamSeason {
    /// Ladder lookup key, present only when both ids are known.
    pub fn ladder_key(&self) -> Option<LadderKey> {
        Some(LadderKey {
            competition: self.competition_id?,
            fixture: self.fixture_id?,
        })
    }
}

/// Sort team seasons for listing: category, then name, then id.
pub fn sort_for_display(teams: &mut [TeamSeason]) {
    teams.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
}
