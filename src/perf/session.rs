//! A performance view session: loaded data, selection and ladder cache.
//!
//! Stats are never stored. Every read folds the currently selected games
//! with whatever the ladder cache holds at that moment, so a read taken
//! while lookups are still running shows those rows as loading, and the
//! next read after [`PerformanceSession::ladder_updates`] fires shows them
//! resolved.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use super::filter::filter_completed;
use super::ladder_cache::LadderCache;
use super::reducer::reduce;
use super::selection::Selection;
use crate::cli::types::{TeamCategory, TeamSeasonId};
use crate::ladder::LadderSource;
use crate::models::{
    AggregateStats, ClubIdentity, Game, IndividualStats, LadderKey, LadderStatus,
    PerformanceReport, TeamSeason,
};
use crate::storage::ClubStore;
use crate::{ClubError, Result};

pub struct PerformanceSession<S: LadderSource> {
    club: ClubIdentity,
    teams: Vec<TeamSeason>,
    games: Vec<Game>,
    selection: Selection,
    ladder: LadderCache<S>,
}

impl<S: LadderSource> PerformanceSession<S> {
    /// Start a session over already loaded data. Nothing is selected yet.
    pub fn new(
        club: ClubIdentity,
        teams: Vec<TeamSeason>,
        games: Vec<Game>,
        source: S,
        timeout: Duration,
    ) -> Self {
        let selection = Selection::new(teams.iter().map(|t| t.id.clone()));
        Self {
            club,
            teams,
            games,
            selection,
            ladder: LadderCache::new(source, timeout),
        }
    }

    /// Load the club's team seasons and completed games from `store`.
    ///
    /// Store failures are returned as-is: there is nothing to aggregate
    /// without both datasets.
    pub fn load<C: ClubStore + ?Sized>(
        store: &C,
        club: ClubIdentity,
        source: S,
        timeout: Duration,
    ) -> Result<Self> {
        let teams = store.load_team_seasons(&club)?;
        let games = store.load_completed_games(&club)?;
        info!(
            club = %club,
            teams = teams.len(),
            games = games.len(),
            "loaded club data"
        );

        Ok(Self::new(club, teams, games, source, timeout))
    }

    pub fn club(&self) -> &ClubIdentity {
        &self.club
    }

    pub fn team_seasons(&self) -> &[TeamSeason] {
        &self.teams
    }

    pub fn team_season(&self, id: &TeamSeasonId) -> Option<&TeamSeason> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn is_selected(&self, id: &TeamSeasonId) -> bool {
        self.selection.is_selected(id)
    }

    /// Selected team seasons in load order.
    pub fn selected(&self) -> Vec<&TeamSeason> {
        self.selection
            .selected()
            .filter_map(|id| self.team_season(id))
            .collect()
    }

    pub fn toggle_selection(&mut self, id: &TeamSeasonId) {
        let added = self.selection.toggle(id);
        self.after_change(added);
    }

    pub fn select_all(&mut self) {
        let added = self.selection.select_all();
        self.after_change(added);
    }

    pub fn select_none(&mut self) {
        self.selection.select_none();
        self.after_change(Vec::new());
    }

    /// Select exactly the team seasons of one category.
    pub fn select_category(&mut self, category: TeamCategory) {
        let ids: Vec<TeamSeasonId> = self
            .teams
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.id.clone())
            .collect();
        let added = self.selection.select_only(ids);
        self.after_change(added);
    }

    /// Select exactly the given ids; fails on the first unknown id.
    pub fn select_ids(&mut self, ids: &[TeamSeasonId]) -> Result<()> {
        if let Some(missing) = ids.iter().find(|id| !self.selection.is_available(id)) {
            return Err(ClubError::TeamSeasonNotFound {
                id: missing.to_string(),
            });
        }
        let added = self.selection.select_only(ids.iter().cloned());
        self.after_change(added);
        Ok(())
    }

    fn after_change(&mut self, added: Vec<TeamSeasonId>) {
        debug!(selected = self.selection.len(), added = added.len(), "selection changed");
        for id in &added {
            match self.team_season(id).and_then(TeamSeason::ladder_key) {
                Some(key) => {
                    self.ladder.ensure(key);
                }
                None => debug!(team = %id, "no ladder identifiers, skipping lookup"),
            }
        }
    }

    /// Ladder status for a loaded team season, `None` for unknown ids.
    pub fn ladder_status(&self, id: &TeamSeasonId) -> Option<LadderStatus> {
        self.team_season(id).map(|t| self.ladder_status_of(t))
    }

    fn ladder_status_of(&self, team: &TeamSeason) -> LadderStatus {
        match team.ladder_key() {
            Some(key) => self.ladder.status(&key),
            None => LadderStatus::missing_identifiers(),
        }
    }

    /// Current aggregate and per-team stats.
    pub fn report(&self) -> PerformanceReport {
        let selected = self.selected();
        let filtered = filter_completed(&self.games, &selected);
        reduce(&filtered, &selected, &self.club, |t| self.ladder_status_of(t))
    }

    pub fn aggregate(&self) -> AggregateStats {
        self.report().aggregate
    }

    pub fn individual(&self) -> BTreeMap<TeamSeasonId, IndividualStats> {
        self.report().individual
    }

    /// Fires whenever a ladder lookup resolves; re-read the report then.
    pub fn ladder_updates(&self) -> watch::Receiver<u64> {
        self.ladder.subscribe()
    }

    /// Number of ladder lookups still running.
    pub fn pending_lookups(&self) -> usize {
        self.ladder.in_flight()
    }

    /// Wait until no selected team season's ladder lookup is running.
    ///
    /// Lookups carry their own timeout, so this always finishes.
    pub async fn settle(&self) {
        let keys: Vec<LadderKey> = self
            .selected()
            .into_iter()
            .filter_map(TeamSeason::ladder_key)
            .collect();
        self.ladder.settle(&keys).await;
    }

    /// End the session: abort lookups and drop the cache and selection.
    pub fn dispose(mut self) {
        self.selection.select_none();
        self.ladder.dispose();
        debug!(club = %self.club, "performance session disposed");
    }
}
