//! In-memory entity snapshots backing the views.
//!
//! The server is the only source of truth; these stores hold the latest
//! fetched snapshot plus any speculative local mutations. Snapshot
//! application is gated by a monotonically increasing token so a slow,
//! overlapping poll response can never overwrite a fresher one.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Entities that can live in an [`EntityStore`].
pub trait HasId {
    fn id(&self) -> Uuid;
}

/// Monotonic fetch-version gate: only the freshest snapshot wins.
#[derive(Debug, Default)]
pub struct UpdateGate {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl UpdateGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the token for a fetch that is about to be issued.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns true when `token` is newer than everything applied so far,
    /// and records it as applied. Stale tokens leave the gate untouched.
    pub fn try_commit(&self, token: u64) -> bool {
        self.applied.fetch_max(token, Ordering::SeqCst) < token
    }
}

pub struct EntityStore<T> {
    entries: DashMap<Uuid, T>,
    gate: UpdateGate,
}

impl<T: Clone + HasId> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            gate: UpdateGate::new(),
        }
    }

    /// Token for a list fetch that is about to go out.
    pub fn begin_fetch(&self) -> u64 {
        self.gate.begin()
    }

    /// Replace the whole snapshot, unless a fresher response already landed.
    /// Returns whether the snapshot was applied.
    pub fn apply_snapshot(&self, token: u64, items: Vec<T>) -> bool {
        if !self.gate.try_commit(token) {
            return false;
        }
        self.entries.clear();
        for item in items {
            self.entries.insert(item.id(), item);
        }
        true
    }

    /// Insert or replace a single entity, returning the previous state so a
    /// failed mutation can roll back.
    pub fn upsert(&self, item: T) -> Option<T> {
        self.entries.insert(item.id(), item)
    }

    /// Undo a speculative [`upsert`](Self::upsert) or
    /// [`remove`](Self::remove).
    pub fn restore(&self, id: Uuid, previous: Option<T>) {
        match previous {
            Some(item) => {
                self.entries.insert(id, item);
            }
            None => {
                self.entries.remove(&id);
            }
        }
    }

    pub fn remove(&self, id: Uuid) -> Option<T> {
        self.entries.remove(&id).map(|(_, item)| item)
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.entries.get(&id).map(|entry| entry.clone())
    }

    pub fn all(&self) -> Vec<T> {
        self.entries.iter().map(|entry| entry.clone()).collect()
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.entries
            .iter()
            .filter(|entry| predicate(entry))
            .map(|entry| entry.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone + HasId> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: Uuid,
        label: String,
    }

    impl HasId for Widget {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn widget(label: &str) -> Widget {
        Widget {
            id: Uuid::new_v4(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_stale_snapshot_is_discarded() {
        let store = EntityStore::new();
        let older = store.begin_fetch();
        let newer = store.begin_fetch();

        let fresh = widget("fresh");
        assert!(store.apply_snapshot(newer, vec![fresh.clone()]));

        // The slower, older response arrives afterwards and must lose
        assert!(!store.apply_snapshot(older, vec![widget("stale")]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(fresh.id).unwrap().label, "fresh");
    }

    #[test]
    fn test_upsert_returns_previous_for_rollback() {
        let store = EntityStore::new();
        let original = widget("original");
        store.upsert(original.clone());

        let mut predicted = original.clone();
        predicted.label = "predicted".to_string();
        let previous = store.upsert(predicted);

        store.restore(original.id, previous);
        assert_eq!(store.get(original.id).unwrap().label, "original");
    }

    #[test]
    fn test_restore_removes_speculative_insert() {
        let store = EntityStore::new();
        let item = widget("speculative");
        let previous = store.upsert(item.clone());
        assert!(previous.is_none());

        store.restore(item.id, previous);
        assert!(store.is_empty());
    }
}
