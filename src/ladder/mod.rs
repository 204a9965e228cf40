//! Ladder lookup backends.
//!
//! The cache in [`crate::perf::ladder_cache`] only knows about the
//! [`LadderSource`] trait, so the hosted HTTP function can be swapped for
//! another backend (or a scripted one in tests) without touching it.

pub mod http;

use std::future::Future;

use crate::error::LadderError;
use crate::models::{LadderKey, LadderStanding};

pub use http::HttpLadderSource;

/// Something that can resolve a team's ladder standing.
pub trait LadderSource: Send + Sync + 'static {
    fn lookup(
        &self,
        key: LadderKey,
    ) -> impl Future<Output = Result<LadderStanding, LadderError>> + Send;
}

/// Source used with `--no-ladder`; every lookup fails immediately with
/// [`LadderError::Disabled`] so rows show that instead of spinning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLadder;

impl LadderSource for NoLadder {
    fn lookup(
        &self,
        _key: LadderKey,
    ) -> impl Future<Output = Result<LadderStanding, LadderError>> + Send {
        async { Err(LadderError::Disabled) }
    }
}
