//! Integration tests for the SQLite store and the session built on it

use club_perf::{
    ingest::Snapshot,
    ladder::NoLadder,
    perf::PerformanceSession,
    storage::{ClubDatabase, ClubStore},
    ClubIdentity, LadderError, TeamCategory, TeamSeasonId, DEFAULT_LADDER_TIMEOUT,
};

const SNAPSHOT: &str = r#"{
    "club": "Mentone",
    "teams": [
        {"id": "t1", "name": "Men's Premier League", "compID": "10", "fixtureID": 100, "type": "Senior"},
        {"id": "t2", "name": "U14 Girls", "compID": 20, "fixtureID": "200", "type": "Junior"},
        {"id": 3, "name": "Masters 45+", "type": "Masters"},
        {"name": "no id"}
    ],
    "games": [
        {"id": "g1", "fixtureId": 100, "status": "completed", "date": "2024-04-13",
         "homeTeam": {"club": "Mentone", "name": "Mentone PL", "score": "3"},
         "awayTeam": {"club": "Rivals", "name": "Rivals PL", "score": 1}},
        {"id": "g2", "fixtureId": 200, "status": "Completed", "date": {"seconds": 1713571200},
         "homeTeam": {"club": "Rivals", "score": 2},
         "awayTeam": {"club": "mentone", "score": 2}},
        {"id": "g3", "fixtureId": 100, "status": "scheduled",
         "homeTeam": {"club": "Mentone"}, "awayTeam": {"club": "Other"}},
        {"id": "g4", "fixtureId": 900, "status": "completed",
         "homeTeam": {"club": "Elsewhere", "score": 1}, "awayTeam": {"club": "Other", "score": 0}},
        {"id": "g5", "status": "completed"}
    ]
}"#;

fn imported_db() -> ClubDatabase {
    let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
    let mut db = ClubDatabase::new_in_memory().unwrap();
    db.import(
        &ClubIdentity::new("Mentone"),
        &snapshot.team_seasons,
        &snapshot.games,
    )
    .unwrap();
    db
}

#[test]
fn test_snapshot_rejects_unusable_records() {
    let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
    assert_eq!(snapshot.team_seasons.len(), 3);
    assert_eq!(snapshot.rejected_team_seasons, 1);
    assert_eq!(snapshot.games.len(), 4);
    assert_eq!(snapshot.rejected_games, 1);
}

#[test]
fn test_import_counts() {
    let db = imported_db();
    assert_eq!(db.counts().unwrap(), (3, 4));
}

#[test]
fn test_team_seasons_ordered_by_category_then_name() {
    let db = imported_db();
    let teams = db.load_team_seasons(&ClubIdentity::new("MENTONE")).unwrap();

    let categories: Vec<TeamCategory> = teams.iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![TeamCategory::Senior, TeamCategory::Junior, TeamCategory::Masters]
    );
    assert_eq!(teams[2].id, TeamSeasonId::new("3"));
    assert_eq!(teams[2].ladder_key(), None);
}

#[test]
fn test_completed_games_only_involve_club() {
    let db = imported_db();
    let games = db.load_completed_games(&ClubIdentity::new("Mentone")).unwrap();

    let ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["g1", "g2"]);
    assert_eq!(games[0].scores(), Some((3, 1)));
}

#[test]
fn test_other_club_sees_nothing() {
    let db = imported_db();
    let club = ClubIdentity::new("Rivals");
    assert!(db.load_team_seasons(&club).unwrap().is_empty());
    assert_eq!(db.load_completed_games(&club).unwrap().len(), 2);
}

#[test]
fn test_clear() {
    let mut db = imported_db();
    db.clear().unwrap();
    assert_eq!(db.counts().unwrap(), (0, 0));
}

#[tokio::test]
async fn test_session_over_database() {
    let db = imported_db();
    let mut session = PerformanceSession::load(
        &db,
        ClubIdentity::new("Mentone"),
        NoLadder,
        DEFAULT_LADDER_TIMEOUT,
    )
    .unwrap();

    session.select_all();
    session.settle().await;
    let report = session.report();

    assert_eq!(report.aggregate.teams, 3);
    assert_eq!(report.aggregate.tally.games_played, 2);
    assert_eq!(report.aggregate.tally.wins, 1);
    assert_eq!(report.aggregate.tally.draws, 1);
    assert_eq!(report.aggregate.tally.goals_for, 5);
    assert_eq!(report.aggregate.tally.goals_against, 3);

    let masters = &report.individual[&TeamSeasonId::new("3")];
    assert_eq!(masters.tally.games_played, 0);
    assert_eq!(masters.ladder.error, Some(LadderError::MissingIdentifiers));

    let seniors = &report.individual[&TeamSeasonId::new("t1")];
    assert_eq!(seniors.ladder.error, Some(LadderError::Disabled));

    session.dispose();
}

#[tokio::test]
async fn test_database_and_snapshot_agree() {
    let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
    let db = imported_db();
    let club = ClubIdentity::new("Mentone");

    let from_db = {
        let mut s = PerformanceSession::load(&db, club.clone(), NoLadder, DEFAULT_LADDER_TIMEOUT)
            .unwrap();
        s.select_all();
        s.report()
    };
    let from_snapshot = {
        let mut s =
            PerformanceSession::load(&snapshot, club, NoLadder, DEFAULT_LADDER_TIMEOUT).unwrap();
        s.select_all();
        s.report()
    };

    assert_eq!(from_db.aggregate, from_snapshot.aggregate);
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("club.db");

    let db = ClubDatabase::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(db.counts().unwrap(), (0, 0));
}
