//! Unit tests for store document coercion

use super::*;
use serde_json::json;

#[cfg(test)]
mod loose_value_tests {
    use super::*;

    #[test]
    fn test_loose_u32_accepts_numbers_and_strings() {
        assert_eq!(loose_u32(&json!(3)), Some(3));
        assert_eq!(loose_u32(&json!("3")), Some(3));
        assert_eq!(loose_u32(&json!(" 12 ")), Some(12));
        assert_eq!(loose_u32(&json!(4.0)), Some(4));
    }

    #[test]
    fn test_loose_u32_rejects_everything_else() {
        assert_eq!(loose_u32(&json!(-1)), None);
        assert_eq!(loose_u32(&json!(2.5)), None);
        assert_eq!(loose_u32(&json!("")), None);
        assert_eq!(loose_u32(&json!("abc")), None);
        assert_eq!(loose_u32(&json!(null)), None);
        assert_eq!(loose_u32(&json!(true)), None);
    }

    #[test]
    fn test_loose_id() {
        assert_eq!(loose_id(&json!("t1")), Some("t1".to_string()));
        assert_eq!(loose_id(&json!(42)), Some("42".to_string()));
        assert_eq!(loose_id(&json!("  ")), None);
        assert_eq!(loose_id(&json!(null)), None);
    }

    #[test]
    fn test_loose_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();

        assert_eq!(loose_date(&json!("2024-05-04")), Some(expected));
        assert_eq!(loose_date(&json!("2024-05-04T14:00:00+10:00")), Some(expected));
        // 2024-05-04T12:00:00Z
        assert_eq!(loose_date(&json!(1714824000)), Some(expected));
        assert_eq!(loose_date(&json!(1714824000000_i64)), Some(expected));
        assert_eq!(
            loose_date(&json!({ "seconds": 1714824000, "nanoseconds": 0 })),
            Some(expected)
        );
        assert_eq!(
            loose_date(&json!({ "_seconds": 1714824000, "_nanoseconds": 0 })),
            Some(expected)
        );
        assert_eq!(loose_date(&json!("next saturday")), None);
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_team_season_full_record() {
        let team = ingest_team_season(&json!({
            "id": "t1",
            "name": "Men's Premier League",
            "compID": "10",
            "fixtureID": 100,
            "type": "Senior"
        }))
        .unwrap();

        assert_eq!(team.id, TeamSeasonId::new("t1"));
        assert_eq!(team.name, "Men's Premier League");
        assert_eq!(team.competition_id, Some(CompetitionId::new(10)));
        assert_eq!(team.fixture_id, Some(FixtureId::new(100)));
        assert_eq!(team.category, TeamCategory::Senior);
    }

    #[test]
    fn test_team_season_without_ladder_ids_is_kept() {
        let team = ingest_team_season(&json!({
            "id": "t2",
            "name": "U12 Mixed",
            "compID": "n/a",
            "type": "junior"
        }))
        .unwrap();

        assert_eq!(team.competition_id, None);
        assert_eq!(team.fixture_id, None);
        assert!(team.ladder_key().is_none());
        assert_eq!(team.category, TeamCategory::Junior);
    }

    #[test]
    fn test_team_season_without_id_is_rejected() {
        assert!(ingest_team_season(&json!({ "name": "Nameless" })).is_none());
    }

    #[test]
    fn test_game_with_string_scores() {
        let game = ingest_game(&json!({
            "id": "g1",
            "fixtureId": "100",
            "homeTeam": { "club": "Mentone", "name": "Mentone PL", "score": "3" },
            "awayTeam": { "club": "Rivals", "name": "Rivals PL", "score": 1 },
            "status": "Completed",
            "date": "2024-05-04"
        }))
        .unwrap();

        assert_eq!(game.fixture_id, FixtureId::new(100));
        assert_eq!(game.home.score, Some(3));
        assert_eq!(game.away.score, Some(1));
        assert!(game.is_completed());
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2024, 5, 4));
    }

    #[test]
    fn test_game_non_numeric_score_becomes_missing() {
        let game = ingest_game(&json!({
            "id": "g2",
            "fixtureId": 100,
            "homeTeam": { "club": "Mentone", "score": 2 },
            "awayTeam": { "club": "Rivals", "score": "TBC" },
            "status": "completed"
        }))
        .unwrap();

        assert_eq!(game.away.score, None);
        assert_eq!(game.scores(), None);
        // Side name falls back to the club name.
        assert_eq!(game.home.name, "Mentone");
    }

    #[test]
    fn test_game_without_fixture_is_rejected() {
        assert!(ingest_game(&json!({
            "id": "g3",
            "homeTeam": { "club": "Mentone", "score": 2 },
            "awayTeam": { "club": "Rivals", "score": 1 },
            "status": "completed"
        }))
        .is_none());
    }

    #[test]
    fn test_game_without_side_is_rejected() {
        assert!(ingest_game(&json!({
            "id": "g4",
            "fixtureId": 100,
            "homeTeam": { "club": "Mentone", "score": 2 },
            "status": "completed"
        }))
        .is_none());
    }

    #[test]
    fn test_game_missing_status_is_other() {
        let game = ingest_game(&json!({
            "id": 7,
            "fixtureId": 100,
            "home": { "clubName": "Mentone", "score": 2 },
            "away": { "clubName": "Rivals", "score": 1 }
        }))
        .unwrap();

        assert_eq!(game.id, GameId::new("7"));
        assert_eq!(game.status, GameStatus::Other);
        assert!(!game.is_completed());
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn test_snapshot_counts_rejects() {
        let contents = json!({
            "club": "Mentone",
            "teams": [
                { "id": "t1", "name": "PL", "compID": 10, "fixtureID": 100, "type": "Senior" },
                { "name": "no id" }
            ],
            "games": [
                {
                    "id": "g1",
                    "fixtureId": 100,
                    "homeTeam": { "club": "Mentone", "score": 3 },
                    "awayTeam": { "club": "Rivals", "score": 1 },
                    "status": "completed"
                },
                { "id": "g2" },
                "not even an object"
            ]
        })
        .to_string();

        let snapshot = Snapshot::from_json(&contents).unwrap();
        assert_eq!(snapshot.club.as_deref(), Some("Mentone"));
        assert_eq!(snapshot.team_seasons.len(), 1);
        assert_eq!(snapshot.rejected_team_seasons, 1);
        assert_eq!(snapshot.games.len(), 1);
        assert_eq!(snapshot.rejected_games, 2);
    }

    #[test]
    fn test_snapshot_top_level_must_be_object() {
        assert!(Snapshot::from_json("[1, 2, 3]").is_err());
        assert!(Snapshot::from_json("not json").is_err());
    }

    #[test]
    fn test_snapshot_empty_object() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.club.is_none());
        assert!(snapshot.team_seasons.is_empty());
        assert!(snapshot.games.is_empty());
    }
}
