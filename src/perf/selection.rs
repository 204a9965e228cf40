use std::collections::BTreeSet;

use crate::cli::types::TeamSeasonId;

/// Which of the loaded team seasons currently feed the aggregate.
///
/// Every mutation returns the ids that became selected by it, so the caller
/// knows which ladder entries are newly needed. Ids outside the loaded set
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    available: Vec<TeamSeasonId>,
    selected: BTreeSet<TeamSeasonId>,
}

impl Selection {
    pub fn new(available: impl IntoIterator<Item = TeamSeasonId>) -> Self {
        let mut seen = BTreeSet::new();
        let available = available
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        Self {
            available,
            selected: BTreeSet::new(),
        }
    }

    pub fn is_available(&self, id: &TeamSeasonId) -> bool {
        self.available.contains(id)
    }

    pub fn is_selected(&self, id: &TeamSeasonId) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in load order.
    pub fn selected(&self) -> impl Iterator<Item = &TeamSeasonId> {
        self.available.iter().filter(|id| self.selected.contains(*id))
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &TeamSeasonId) -> Vec<TeamSeasonId> {
        if !self.is_available(id) {
            return Vec::new();
        }

        if self.selected.remove(id) {
            Vec::new()
        } else {
            self.selected.insert(id.clone());
            vec![id.clone()]
        }
    }

    pub fn select_all(&mut self) -> Vec<TeamSeasonId> {
        let ids = self.available.clone();
        self.select_only(ids)
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    /// Replace the selection with the given ids (unknown ones dropped).
    pub fn select_only(&mut self, ids: impl IntoIterator<Item = TeamSeasonId>) -> Vec<TeamSeasonId> {
        let next: BTreeSet<TeamSeasonId> = ids
            .into_iter()
            .filter(|id| self.is_available(id))
            .collect();

        let added = self
            .available
            .iter()
            .filter(|id| next.contains(*id) && !self.selected.contains(*id))
            .cloned()
            .collect();

        self.selected = next;
        added
    }
}
