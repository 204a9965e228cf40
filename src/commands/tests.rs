//! Unit tests for command helpers

use super::*;
use crate::commands::performance::TeamSelection;
use crate::{TeamCategory, TeamSeasonId};
use std::io::Write;

#[test]
fn test_format_goal_difference() {
    assert_eq!(format_goal_difference(2), "+2");
    assert_eq!(format_goal_difference(0), "0");
    assert_eq!(format_goal_difference(-3), "-3");
}

#[test]
fn test_team_selection_from_args() {
    assert_eq!(TeamSelection::from_args(vec![], None), TeamSelection::All);
    assert_eq!(
        TeamSelection::from_args(vec![], Some(TeamCategory::Junior)),
        TeamSelection::Category(TeamCategory::Junior)
    );
    assert_eq!(
        TeamSelection::from_args(vec![TeamSeasonId::new("t1")], None),
        TeamSelection::Ids(vec![TeamSeasonId::new("t1")])
    );
}

#[test]
fn test_read_snapshot_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"club": "Mentone", "teams": [{{"id": "t1", "name": "PL", "compID": 10, "fixtureID": 100}}], "games": []}}"#
    )
    .unwrap();

    let snapshot = read_snapshot(file.path()).unwrap();
    assert_eq!(snapshot.club.as_deref(), Some("Mentone"));
    assert_eq!(snapshot.team_seasons.len(), 1);
}

#[test]
fn test_read_snapshot_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_snapshot(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(crate::ClubError::Io(_))));
}

#[test]
fn test_open_store_prefers_snapshot() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"teams": [{{"id": "t1", "name": "PL"}}, {{"id": "t2", "name": "PL2"}}]}}"#
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("unused.db");

    let store = open_store(Some(file.path()), &db_path).unwrap();
    let teams = store
        .load_team_seasons(&crate::ClubIdentity::new("Mentone"))
        .unwrap();

    assert_eq!(teams.len(), 2);
    assert!(!db_path.exists());
}

#[tokio::test]
async fn test_collect_report_without_ladder() {
    let snapshot = crate::ingest::Snapshot::from_json(
        r#"{"teams": [{"id": "t1", "name": "PL", "compID": 10, "fixtureID": 100}],
            "games": [{"id": "g1", "fixtureId": 100, "status": "completed",
                       "homeTeam": {"club": "Mentone", "score": 2},
                       "awayTeam": {"club": "Rivals", "score": 0}}]}"#,
    )
    .unwrap();
    let settings = crate::config::Settings {
        club: crate::ClubIdentity::new("Mentone"),
        ladder_url: None,
        ladder_timeout: crate::DEFAULT_LADDER_TIMEOUT,
        db_path: std::path::PathBuf::from("unused.db"),
    };

    let report = performance::collect_report(
        &snapshot,
        &settings,
        crate::ladder::NoLadder,
        &TeamSelection::All,
    )
    .await
    .unwrap();

    let t1 = &report.individual[&TeamSeasonId::new("t1")];
    assert_eq!(t1.tally.wins, 1);
    assert_eq!(t1.ladder.error, Some(crate::LadderError::Disabled));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["individual"]["t1"]["ladder_error"], "ladder lookups disabled");
}

#[tokio::test]
async fn test_collect_report_empty_store_fails() {
    let snapshot = crate::ingest::Snapshot::default();
    let settings = crate::config::Settings {
        club: crate::ClubIdentity::new("Mentone"),
        ladder_url: None,
        ladder_timeout: crate::DEFAULT_LADDER_TIMEOUT,
        db_path: std::path::PathBuf::from("unused.db"),
    };

    let result = performance::collect_report(
        &snapshot,
        &settings,
        crate::ladder::NoLadder,
        &TeamSelection::All,
    )
    .await;
    assert!(matches!(result, Err(crate::ClubError::NoTeamSeasons { .. })));
}
