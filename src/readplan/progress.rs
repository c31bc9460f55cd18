//! # Progress Tracking
//!
//! [`ProgressTracker`] owns the set of completed-chapter record identifiers and keeps
//! it in sync with durable storage. Identifiers are opaque here; they are derived by
//! callers through [`crate::model::record_id`].
//!
//! Persistence is best-effort and immediate:
//! - Loading degrades to an empty set when the stored value is missing, unreadable or
//!   not a JSON array of strings.
//! - Every [`ProgressTracker::toggle`] writes the full resulting set straight away.
//!   A failed write is logged and reported through [`Toggle::persisted`], while the
//!   in-memory state keeps the new value.
//!
//! Stored identifiers are never pruned: entries that no longer match the plan simply
//! never match a lookup again.

use crate::error::{ReadplanError, Result};
use crate::store::{KeyValueStore, PROGRESS_KEY};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// Membership after the toggle.
    pub complete: bool,
    /// Whether the resulting set reached durable storage.
    pub persisted: bool,
}

pub struct ProgressTracker<S: KeyValueStore> {
    store: S,
    completed: BTreeSet<String>,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    /// Rehydrates the completed set from `store`.
    pub fn load(store: S) -> Self {
        let completed = read_completed(&store);
        debug!(completed = completed.len(), "progress loaded");
        Self { store, completed }
    }

    pub fn is_complete(&self, record_id: &str) -> bool {
        self.completed.contains(record_id)
    }

    /// Flips membership of `record_id` and persists the full set.
    pub fn toggle(&mut self, record_id: &str) -> Toggle {
        let complete = if self.completed.remove(record_id) {
            false
        } else {
            self.completed.insert(record_id.to_string());
            true
        };

        let persisted = match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, record_id, "could not persist progress");
                false
            }
        };
        debug!(record_id, complete, "progress toggled");
        Toggle {
            complete,
            persisted,
        }
    }

    /// Writes the current set to storage.
    pub fn save(&mut self) -> Result<()> {
        let ids: Vec<&String> = self.completed.iter().collect();
        let json = serde_json::to_string(&ids).map_err(ReadplanError::Serialization)?;
        self.store.set(PROGRESS_KEY, &json)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// How many of `record_ids` are complete.
    pub fn completed_count<'a, I>(&self, record_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        record_ids
            .into_iter()
            .filter(|id| self.is_complete(id))
            .count()
    }

    pub fn completed(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn read_completed<S: KeyValueStore>(store: &S) -> BTreeSet<String> {
    let raw = match store.get(PROGRESS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeSet::new(),
        Err(e) => {
            warn!(error = %e, "progress unreadable, starting empty");
            return BTreeSet::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            warn!(error = %e, "progress corrupt, starting empty");
            BTreeSet::new()
        }
    }
}
