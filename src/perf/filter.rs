use std::collections::HashSet;

use crate::cli::types::FixtureId;
use crate::models::{Game, TeamSeason};

/// Completed games with both scores present that belong to one of the
/// selected team seasons (matched by fixture id).
///
/// Incomplete games are dropped without comment; during a season that is
/// most of them. Relative input order is preserved.
pub fn filter_completed<'a>(games: &'a [Game], selected: &[&TeamSeason]) -> Vec<&'a Game> {
    let fixtures: HashSet<FixtureId> = selected.iter().filter_map(|t| t.fixture_id).collect();

    games
        .iter()
        .filter(|g| fixtures.contains(&g.fixture_id))
        .filter(|g| g.is_completed())
        .filter(|g| g.scores().is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{CompetitionId, GameId, TeamCategory, TeamSeasonId};
    use crate::models::{GameStatus, Side};

    fn team(id: &str, fixture: Option<u32>) -> TeamSeason {
        TeamSeason {
            id: TeamSeasonId::new(id),
            name: id.to_uppercase(),
            competition_id: Some(CompetitionId::new(10)),
            fixture_id: fixture.map(FixtureId::new),
            category: TeamCategory::Senior,
        }
    }

    fn game(id: &str, fixture: u32, home: Option<u32>, away: Option<u32>, status: GameStatus) -> Game {
        Game {
            id: GameId::new(id),
            fixture_id: FixtureId::new(fixture),
            home: Side {
                club_name: "Mentone".into(),
                name: "Mentone".into(),
                score: home,
            },
            away: Side {
                club_name: "Rivals".into(),
                name: "Rivals".into(),
                score: away,
            },
            status,
            date: None,
        }
    }

    fn ids(games: &[&Game]) -> Vec<String> {
        games.iter().map(|g| g.id.to_string()).collect()
    }

    #[test]
    fn test_keeps_only_selected_fixtures() {
        let t1 = team("t1", Some(100));
        let games = vec![
            game("g1", 100, Some(1), Some(0), GameStatus::Completed),
            game("g2", 200, Some(1), Some(0), GameStatus::Completed),
        ];

        assert_eq!(ids(&filter_completed(&games, &[&t1])), vec!["g1"]);
    }

    #[test]
    fn test_excludes_missing_scores_and_incomplete() {
        let t1 = team("t1", Some(100));
        let games = vec![
            game("g1", 100, Some(3), None, GameStatus::Completed),
            game("g2", 100, None, Some(2), GameStatus::Completed),
            game("g3", 100, Some(1), Some(1), GameStatus::Scheduled),
            game("g4", 100, Some(2), Some(2), GameStatus::Other),
            game("g5", 100, Some(0), Some(0), GameStatus::Completed),
        ];

        assert_eq!(ids(&filter_completed(&games, &[&t1])), vec!["g5"]);
    }

    #[test]
    fn test_preserves_input_order() {
        let t1 = team("t1", Some(100));
        let t2 = team("t2", Some(200));
        let games = vec![
            game("g3", 200, Some(1), Some(0), GameStatus::Completed),
            game("g1", 100, Some(1), Some(0), GameStatus::Completed),
            game("g2", 200, Some(1), Some(0), GameStatus::Completed),
        ];

        assert_eq!(
            ids(&filter_completed(&games, &[&t1, &t2])),
            vec!["g3", "g1", "g2"]
        );
    }

    #[test]
    fn test_empty_selection_yields_nothing() {
        let games = vec![game("g1", 100, Some(1), Some(0), GameStatus::Completed)];
        assert!(filter_completed(&games, &[]).is_empty());
    }

    #[test]
    fn test_team_without_fixture_matches_nothing() {
        let t1 = team("t1", None);
        let games = vec![game("g1", 100, Some(1), Some(0), GameStatus::Completed)];
        assert!(filter_completed(&games, &[&t1]).is_empty());
    }
}
