//! Hockey Club Performance Library
//!
//! Aggregates a club's results across team seasons (games played, wins,
//! draws, losses, goals for and against, goal difference) and merges in each
//! team's ladder position and points from an external lookup.
//!
//! ## Features
//!
//! - **Ingestion**: Coerce loosely typed store documents into strict records
//! - **Game Filter**: Completed, fully scored games for a team selection
//! - **Stats Reducer**: Per-team and club-wide tallies with derived goal difference
//! - **Ladder Cache**: Single-flight, timeout-bounded ladder lookups per competition
//! - **Sessions**: Selection-driven views that recompute on every read
//! - **Storage**: Local SQLite copy of team seasons and games
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use club_perf::{
//!     ladder::HttpLadderSource, perf::PerformanceSession, storage::ClubDatabase,
//!     ClubIdentity, DEFAULT_LADDER_TIMEOUT,
//! };
//!
//! # async fn example() -> club_perf::Result<()> {
//! let db = ClubDatabase::open(&ClubDatabase::default_path()?)?;
//! let source = HttpLadderSource::new("https://example.invalid/ladder", DEFAULT_LADDER_TIMEOUT)?;
//! let mut session =
//!     PerformanceSession::load(&db, ClubIdentity::new("Mentone"), source, DEFAULT_LADDER_TIMEOUT)?;
//!
//! session.select_all();
//! session.settle().await;
//! println!("{:?}", session.aggregate());
//! session.dispose();
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CLUB_PERF_CLUB=Mentone
//! export CLUB_PERF_LADDER_URL=https://example.invalid/ladder
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod ladder;
pub mod models;
pub mod perf;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{CompetitionId, FixtureId, GameId, TeamCategory, TeamSeasonId};
pub use error::{ClubError, LadderError, Result};
pub use models::{ClubIdentity, Game, TeamSeason};
pub use perf::DEFAULT_LADDER_TIMEOUT;

pub const CLUB_ENV_VAR: &str = "CLUB_PERF_CLUB";
pub const LADDER_URL_ENV_VAR: &str = "CLUB_PERF_LADDER_URL";
pub const LADDER_TIMEOUT_ENV_VAR: &str = "CLUB_PERF_LADDER_TIMEOUT_SECS";
pub const DB_PATH_ENV_VAR: &str = "CLUB_PERF_DB";
