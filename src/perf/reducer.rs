use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::cli::types::{FixtureId, TeamSeasonId};
use crate::models::{
    AggregateStats, ClubIdentity, Game, IndividualStats, LadderStatus, PerformanceReport, Tally,
    TeamSeason,
};


/// Fold filtered games into per-team-season tallies and the club aggregate.
///
/// `selected` decides which team seasons get a row (a zeroed one if they
/// have no games). Each game is credited to the first selected team season
/// with its fixture id. Games the club did not play in are skipped. The
/// ladder columns are read from `ladder` and never written.
///
/// This never fails; anything that cannot be tallied is left out.
pub fn reduce<F>(
    games: &[&Game],
    selected: &[&TeamSeason],
    club: &ClubIdentity,
    ladder: F,
) -> PerformanceReport
where
    F: Fn(&TeamSeason) -> LadderStatus,
{
    let mut tallies: BTreeMap<TeamSeasonId, Tally> = BTreeMap::new();
    let mut by_fixture: HashMap<FixtureId, &TeamSeasonId> = HashMap::new();

    for team in selected {
        tallies.entry(team.id.clone()).or_default();
        if let Some(fixture) = team.fixture_id {
            by_fixture.entry(fixture).or_insert(&team.id);
        }
    }

    for game in games {
        let Some(team_id) = by_fixture.get(&game.fixture_id) else {
            continue;
        };
        let Some((goals_for, goals_against)) = game.club_goals(club) else {
            debug!(game = %game.id, club = %club, "club not on either side, skipping");
            continue;
        };
        if let Some(tally) = tallies.get_mut(*team_id) {
            tally.record(goals_for, goals_against);
        }
    }

    let mut aggregate = AggregateStats::default();
    let mut individual = BTreeMap::new();

    for team in selected {
        let Some(tally) = tallies.get(&team.id) else {
            continue;
        };
        if individual.contains_key(&team.id) {
            continue;
        }

        aggregate.teams += 1;
        aggregate.tally.absorb(tally);

        individual.insert(
            team.id.clone(),
            IndividualStats {
                id: team.id.clone(),
                name: team.name.clone(),
                category: team.category,
                tally: *tally,
                ladder: ladder(team),
            },
        );
    }

    PerformanceReport {
        aggregate,
        individual,
    }
}
