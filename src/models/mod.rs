//! Strictly typed club records and the derived statistics built from them.
//!
//! Everything in here has already passed the ingestion boundary
//! (see [`crate::ingest`]), so ids and scores are real numbers.

pub mod club;
pub mod game;
pub mod ladder;
pub mod stats;
pub mod team_season;

pub use club::{club_key, ClubIdentity};
pub use game::{Game, GameStatus, Side};
pub use ladder::{LadderEntry, LadderKey, LadderStanding, LadderStatus};
pub use stats::{AggregateStats, IndividualStats, PerformanceReport, Tally};
pub use team_season::TeamSeason;
