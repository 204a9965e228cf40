//! Performance aggregation command implementation

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::types::{TeamCategory, TeamSeasonId},
    commands::{format_goal_difference, open_store},
    config::Settings,
    ladder::{HttpLadderSource, LadderSource, NoLadder},
    models::{IndividualStats, PerformanceReport},
    perf::PerformanceSession,
    storage::ClubStore,
    ClubError, Result,
};

/// Parameters for the perf command
#[derive(Debug)]
pub struct PerfParams {
    pub club: Option<String>,
    pub db: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub teams: Vec<TeamSeasonId>,
    pub category: Option<TeamCategory>,
    pub ladder_url: Option<String>,
    pub no_ladder: bool,
    pub json: bool,
}

/// Which team seasons a report covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelection {
    All,
    Ids(Vec<TeamSeasonId>),
    Category(TeamCategory),
}

impl TeamSelection {
    pub fn from_args(teams: Vec<TeamSeasonId>, category: Option<TeamCategory>) -> Self {
        match (teams.is_empty(), category) {
            (false, _) => TeamSelection::Ids(teams),
            (true, Some(category)) => TeamSelection::Category(category),
            (true, None) => TeamSelection::All,
        }
    }
}

/// Handle the perf command
pub async fn handle_perf(params: PerfParams) -> Result<()> {
    let settings = Settings::resolve(params.club, params.ladder_url, params.db)?;
    let store = open_store(params.snapshot.as_deref(), &settings.db_path)?;
    let selection = TeamSelection::from_args(params.teams, params.category);

    let report = if params.no_ladder {
        collect_report(store.as_ref(), &settings, NoLadder, &selection).await?
    } else {
        let source = HttpLadderSource::new(settings.require_ladder_url()?, settings.ladder_timeout)?;
        collect_report(store.as_ref(), &settings, source, &selection).await?
    };

    if params.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, !params.no_ladder);
    }

    Ok(())
}

/// Run one session to completion: load, select, wait for ladder lookups,
/// read the report, dispose.
pub async fn collect_report<C, S>(
    store: &C,
    settings: &Settings,
    source: S,
    selection: &TeamSelection,
) -> Result<PerformanceReport>
where
    C: ClubStore + ?Sized,
    S: LadderSource,
{
    let mut session =
        PerformanceSession::load(store, settings.club.clone(), source, settings.ladder_timeout)?;

    if session.team_seasons().is_empty() {
        return Err(ClubError::NoTeamSeasons {
            club: settings.club.to_string(),
        });
    }

    match selection {
        TeamSelection::All => session.select_all(),
        TeamSelection::Ids(ids) => session.select_ids(ids)?,
        TeamSelection::Category(category) => session.select_category(*category),
    }

    info!(
        selected = session.selected().len(),
        pending = session.pending_lookups(),
        "waiting for ladder lookups"
    );
    session.settle().await;

    let report = session.report();
    session.dispose();
    Ok(report)
}

fn ladder_cells(stats: &IndividualStats) -> (String, String, String) {
    let show = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
    let note = match (&stats.ladder.error, stats.ladder.loading) {
        (Some(err), _) => err.to_string(),
        (None, true) => "loading".to_string(),
        (None, false) => String::new(),
    };
    (show(stats.ladder.position), show(stats.ladder.points), note)
}

fn print_report(report: &PerformanceReport, with_ladder: bool) {
    println!(
        "{:<8} {:<36} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4} {:>4}",
        "Category", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pos", "Pts"
    );

    for stats in report.rows() {
        let t = &stats.tally;
        let (pos, pts, note) = if with_ladder {
            ladder_cells(stats)
        } else {
            ("-".into(), "-".into(), String::new())
        };
        println!(
            "{:<8} {:<36} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4} {:>4} {}",
            stats.category.as_str(),
            stats.name,
            t.games_played,
            t.wins,
            t.draws,
            t.losses,
            t.goals_for,
            t.goals_against,
            format_goal_difference(t.goal_difference()),
            pos,
            pts,
            note
        );
    }

    let agg = &report.aggregate.tally;
    println!(
        "{:<45} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5}",
        format!("Club total ({} teams)", report.aggregate.teams),
        agg.games_played,
        agg.wins,
        agg.draws,
        agg.losses,
        agg.goals_for,
        agg.goals_against,
        format_goal_difference(agg.goal_difference()),
    );
}
