//! Type-safe wrappers and enums for club data.

pub mod category;
pub mod ids;

pub use category::TeamCategory;
pub use ids::{CompetitionId, FixtureId, GameId, TeamSeasonId};
