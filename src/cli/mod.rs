//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{CompetitionId, FixtureId, TeamCategory, TeamSeasonId};

/// Where club data is read from, shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Club name (or set `CLUB_PERF_CLUB` env var).
    #[clap(long, short)]
    pub club: Option<String>,

    /// SQLite database path (or set `CLUB_PERF_DB`; defaults to the user data dir).
    #[clap(long)]
    pub db: Option<PathBuf>,

    /// Read a JSON snapshot export instead of the database.
    #[clap(long, conflicts_with = "db")]
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the club's team seasons, ordered by category then name.
    Teams {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Aggregate results for selected team seasons and show ladder standings.
    ///
    /// With no `--team` or `--category`, every team season is selected.
    Perf {
        #[clap(flatten)]
        source: SourceArgs,

        /// Team season id to include (repeatable): `-t t1 -t t2`.
        #[clap(long = "team", short = 't')]
        teams: Vec<TeamSeasonId>,

        /// Include only team seasons of this category.
        #[clap(long, conflicts_with = "teams")]
        category: Option<TeamCategory>,

        /// Ladder endpoint (or set `CLUB_PERF_LADDER_URL`).
        #[clap(long)]
        ladder_url: Option<String>,

        /// Skip ladder lookups entirely.
        #[clap(long, conflicts_with = "ladder_url")]
        no_ladder: bool,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Look up one ladder position.
    Ladder {
        /// Competition id.
        #[clap(long)]
        competition: CompetitionId,

        /// Fixture id.
        #[clap(long)]
        fixture: FixtureId,

        /// Ladder endpoint (or set `CLUB_PERF_LADDER_URL`).
        #[clap(long)]
        ladder_url: Option<String>,

        /// Output the standing as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Load a JSON snapshot of team seasons and games into the database.
    Import {
        /// Snapshot file: `{ "club": .., "teams": [..], "games": [..] }`.
        #[clap(long, short)]
        file: PathBuf,

        /// Club name; defaults to the snapshot's `club`, then `CLUB_PERF_CLUB`.
        #[clap(long, short)]
        club: Option<String>,

        /// SQLite database path (or set `CLUB_PERF_DB`).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Delete existing rows before importing.
        #[clap(long)]
        clear: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "club-perf", about = "Hockey club performance and ladder CLI")]
pub struct ClubPerf {
    /// Log filter used when `RUST_LOG` is not set.
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_perf_with_teams() {
        let app = ClubPerf::try_parse_from([
            "club-perf", "perf", "--club", "Mentone", "-t", "t1", "-t", "t2", "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Perf {
                source,
                teams,
                category,
                json,
                no_ladder,
                ..
            } => {
                assert_eq!(source.club.as_deref(), Some("Mentone"));
                assert_eq!(teams, vec![TeamSeasonId::new("t1"), TeamSeasonId::new("t2")]);
                assert_eq!(category, None);
                assert!(json);
                assert!(!no_ladder);
            }
            _ => panic!("Expected Perf command"),
        }
    }

    #[test]
    fn test_parse_perf_category() {
        let app =
            ClubPerf::try_parse_from(["club-perf", "perf", "--category", "junior"]).unwrap();
        match app.command {
            Commands::Perf { category, .. } => assert_eq!(category, Some(TeamCategory::Junior)),
            _ => panic!("Expected Perf command"),
        }
    }

    #[test]
    fn test_team_and_category_conflict() {
        let result = ClubPerf::try_parse_from([
            "club-perf", "perf", "-t", "t1", "--category", "senior",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_ladder_rejects_non_numeric_ids() {
        let result = ClubPerf::try_parse_from([
            "club-perf", "ladder", "--competition", "ten", "--fixture", "100",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_is_global() {
        let app = ClubPerf::try_parse_from([
            "club-perf", "teams", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(app.log_level, "debug");
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        ClubPerf::command().debug_assert();
    }
}
