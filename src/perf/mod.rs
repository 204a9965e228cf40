//! Team performance aggregation.
//!
//! - `selection`: which team seasons are in the aggregate
//! - `filter`: completed, fully scored games for the selection
//! - `reducer`: win/draw/loss and goal tallies per team and club-wide
//! - `ladder_cache`: single-flight ladder standings per competition/fixture
//! - `session`: ties the above together for one view

pub mod filter;
pub mod ladder_cache;
pub mod reducer;
pub mod selection;
pub mod session;

pub use filter::filter_completed;
pub use ladder_cache::{LadderCache, DEFAULT_LADDER_TIMEOUT};
pub use reducer::reduce;
pub use selection::Selection;
pub use session::PerformanceSession;
