//! Session-scoped, single-flight cache of ladder standings.
//!
//! Each [`LadderKey`] owns one slot. `ensure` flips an empty or failed slot
//! to `Loading` and spawns the lookup on the current tokio runtime; while a
//! slot is `Loading` or `Resolved`, further `ensure` calls do nothing. The
//! `Loading` flag is the only guard, and it is set under the same lock that
//! checks it, so two callers can never both start a lookup for one key.
//!
//! Lookups are not cancelled when a team is deselected. They are bounded by
//! a timeout and only torn down by [`LadderCache::dispose`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use crate::error::LadderError;
use crate::ladder::LadderSource;
use crate::models::{LadderEntry, LadderKey, LadderStatus};


/// Default bound on a single lookup.
pub const DEFAULT_LADDER_TIMEOUT: Duration = Duration::from_secs(15);

type Entries = Arc<Mutex<HashMap<LadderKey, LadderEntry>>>;

pub struct LadderCache<S: LadderSource> {
    source: Arc<S>,
    timeout: Duration,
    entries: Entries,
    tasks: Mutex<Vec<AbortHandle>>,
    updates: Arc<watch::Sender<u64>>,
}

/// Aborts the inner lookup task when the outer one ends or is aborted.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<S: LadderSource> LadderCache<S> {
    pub fn new(source: S, timeout: Duration) -> Self {
        let (updates, _) = watch::channel(0);
        Self {
            source: Arc::new(source),
            timeout,
            entries: Arc::new(Mutex::new(HashMap::new())),
            tasks: Mutex::new(Vec::new()),
            updates: Arc::new(updates),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Make sure a lookup for `key` has been issued.
    ///
    /// Returns `true` if this call started one. Must be called from inside a
    /// tokio runtime.
    pub fn ensure(&self, key: LadderKey) -> bool {
        {
            let mut entries = lock(&self.entries);
            if !LadderEntry::needs_fetch(entries.get(&key)) {
                return false;
            }
            entries.insert(key, LadderEntry::Loading);
        }
        debug!(%key, "ladder lookup started");

        let source = Arc::clone(&self.source);
        let entries = Arc::clone(&self.entries);
        let updates = Arc::clone(&self.updates);
        let timeout = self.timeout;

        let handle = tokio::spawn(async move {
            // A panic in the source comes back as a JoinError, so the slot
            // still leaves Loading.
            let lookup = tokio::spawn(async move { source.lookup(key).await });
            let _abort = AbortOnDrop(lookup.abort_handle());

            let result = match tokio::time::timeout(timeout, lookup).await {
                Err(_) => Err(LadderError::Timeout),
                Ok(Ok(result)) => result,
                Ok(Err(join)) => Err(LadderError::Transport(format!("lookup failed: {join}"))),
            };

            let entry = match result {
                Ok(standing) => {
                    debug!(%key, position = ?standing.position, points = ?standing.points, "ladder lookup resolved");
                    LadderEntry::Resolved(standing)
                }
                Err(err) => {
                    warn!(%key, error = %err, "ladder lookup failed");
                    LadderEntry::Failed(err)
                }
            };

            lock(&entries).insert(key, entry);
            updates.send_modify(|generation| *generation += 1);
        });

        let mut tasks = lock(&self.tasks);
        tasks.retain(|t| !t.is_finished());
        tasks.push(handle.abort_handle());
        true
    }

    pub fn get(&self, key: &LadderKey) -> Option<LadderEntry> {
        lock(&self.entries).get(key).cloned()
    }

    /// Row view of a slot. Keys never requested read as empty, not loading.
    pub fn status(&self, key: &LadderKey) -> LadderStatus {
        self.get(key).map(|e| e.status()).unwrap_or_default()
    }

    pub fn is_loading(&self, key: &LadderKey) -> bool {
        matches!(self.get(key), Some(LadderEntry::Loading))
    }

    pub fn in_flight(&self) -> usize {
        lock(&self.entries).values().filter(|e| e.is_loading()).count()
    }

    /// Receiver bumped once per resolved lookup.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.updates.subscribe()
    }

    /// Wait until none of `keys` is loading.
    pub async fn settle(&self, keys: &[LadderKey]) {
        let mut rx = self.subscribe();
        loop {
            if !keys.iter().any(|k| self.is_loading(k)) {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Abort in-flight lookups and forget every slot.
    pub fn dispose(&self) {
        let tasks = std::mem::take(&mut *lock(&self.tasks));
        if !tasks.is_empty() {
            debug!(count = tasks.len(), "aborting ladder lookups");
        }
        for task in tasks {
            task.abort();
        }
        lock(&self.entries).clear();
    }
}

impl<S: LadderSource> Drop for LadderCache<S> {
    fn drop(&mut self) {
        for task in lock(&self.tasks).drain(..) {
            task.abort();
        }
    }
}
