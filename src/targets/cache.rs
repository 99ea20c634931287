//! In-memory target cache with per-owner capacity enforcement.
//!
//! [`TargetCache`] is the only authority for target data while the process runs.
//! It is filled once from a [`TargetStore`] at construction, mutated only in
//! memory, and flushed back in bulk by [`TargetCache::save_all_to`]. Nothing is
//! persisted between those points: a crash after the last save loses every
//! mutation made since.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::Locator;
use super::types::{Coordinate, Dataset, OwnerId, Targets};
use crate::error::StoreError;
use crate::store::TargetStore;

/// Result of [`TargetCache::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new name was stored.
    Inserted,
    /// An existing name was replaced. Never subject to the capacity check.
    Overwritten,
    /// The owner already holds `max_targets` distinct names; nothing changed.
    CapacityExceeded,
}

impl AddOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::CapacityExceeded)
    }
}

/// Owner-partitioned, capacity-bounded map of named coordinates.
#[derive(Debug)]
pub struct TargetCache {
    owners: Dataset,
    max_targets: usize,
}

impl TargetCache {
    /// An empty cache. Normal operation goes through [`TargetCache::load_from`].
    pub fn new(max_targets: usize) -> Self {
        Self {
            owners: HashMap::new(),
            max_targets,
        }
    }

    /// Construct a cache holding everything `store` reports.
    pub fn load_from(store: &dyn TargetStore, max_targets: usize) -> Self {
        let mut cache = Self::new(max_targets);
        cache.replace_all(store.load_all());
        tracing::info!(
            owners = cache.owner_count(),
            targets = cache.target_count(),
            max_targets,
            "target cache loaded"
        );
        cache
    }

    /// Replace the whole dataset. Empty partitions are dropped on the way in.
    fn replace_all(&mut self, dataset: Dataset) {
        self.owners = dataset
            .into_iter()
            .filter(|(_, targets)| !targets.is_empty())
            .collect();
    }

    pub fn max_targets(&self) -> usize {
        self.max_targets
    }

    /// Store `coordinate` under `name` for `owner`.
    ///
    /// Overwriting an existing name always succeeds. A new name is refused once
    /// the owner holds `max_targets` names; a refused add leaves no trace.
    pub fn add(&mut self, owner: OwnerId, name: &str, coordinate: Coordinate) -> AddOutcome {
        match self.owners.entry(owner) {
            Entry::Occupied(mut partition) => {
                let targets = partition.get_mut();
                if let Some(existing) = targets.get_mut(name) {
                    *existing = coordinate;
                    return AddOutcome::Overwritten;
                }
                if targets.len() >= self.max_targets {
                    return AddOutcome::CapacityExceeded;
                }
                targets.insert(name.to_string(), coordinate);
                AddOutcome::Inserted
            }
            Entry::Vacant(slot) => {
                if self.max_targets == 0 {
                    return AddOutcome::CapacityExceeded;
                }
                slot.insert(HashMap::from([(name.to_string(), coordinate)]));
                AddOutcome::Inserted
            }
        }
    }

    /// [`TargetCache::add`] at wherever `locator` says the owner currently is.
    pub fn add_here(&mut self, owner: OwnerId, name: &str, locator: &dyn Locator) -> AddOutcome {
        let coordinate = locator.current_coordinate_of(&owner);
        self.add(owner, name, coordinate)
    }

    /// Delete `name` for `owner`. Returns whether anything was removed.
    pub fn remove(&mut self, owner: &OwnerId, name: &str) -> bool {
        let Some(targets) = self.owners.get_mut(owner) else {
            return false;
        };
        let removed = targets.remove(name).is_some();
        if targets.is_empty() {
            self.owners.remove(owner);
        }
        removed
    }

    pub fn get(&self, owner: &OwnerId, name: &str) -> Option<&Coordinate> {
        self.owners.get(owner)?.get(name)
    }

    /// Copy of the owner's targets; empty when the owner has none.
    pub fn list_all(&self, owner: &OwnerId) -> Targets {
        self.owners.get(owner).cloned().unwrap_or_default()
    }

    /// Names of the owner's targets starting with `prefix`, ignoring case, sorted.
    pub fn complete(&self, owner: &OwnerId, prefix: &str) -> Vec<String> {
        let Some(targets) = self.owners.get(owner) else {
            return Vec::new();
        };
        let prefix = prefix.to_lowercase();
        let mut names: Vec<String> = targets
            .keys()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Number of targets the owner holds.
    pub fn len(&self, owner: &OwnerId) -> usize {
        self.owners.get(owner).map_or(0, HashMap::len)
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    pub fn target_count(&self) -> usize {
        self.owners.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Fully materialized copy of every partition.
    pub fn snapshot(&self) -> Dataset {
        self.owners.clone()
    }

    /// Flush the entire dataset through `store`.
    ///
    /// Must complete before [`TargetCache::clear_all`] at shutdown. On failure the
    /// in-memory data is untouched and remains the source of truth.
    pub fn save_all_to(&self, store: &dyn TargetStore) -> Result<(), StoreError> {
        store.save_all(&self.owners)?;
        tracing::info!(
            owners = self.owner_count(),
            targets = self.target_count(),
            "target cache saved"
        );
        Ok(())
    }

    /// Drop every partition.
    pub fn clear_all(&mut self) {
        self.owners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn owner() -> OwnerId {
        OwnerId::new(Uuid::now_v7())
    }

    fn at(x: f64) -> Coordinate {
        Coordinate::new("world", x, 64.0, x)
    }

    #[test]
    fn add_then_get() {
        let mut cache = TargetCache::new(3);
        let p = owner();
        assert_eq!(cache.add(p, "home", at(1.0)), AddOutcome::Inserted);
        assert_eq!(cache.get(&p, "home"), Some(&at(1.0)));
    }

    #[test]
    fn overwrite_reports_overwritten() {
        let mut cache = TargetCache::new(1);
        let p = owner();
        cache.add(p, "home", at(1.0));
        assert_eq!(cache.add(p, "home", at(2.0)), AddOutcome::Overwritten);
        assert_eq!(cache.get(&p, "home"), Some(&at(2.0)));
        assert_eq!(cache.len(&p), 1);
    }

    #[test]
    fn zero_capacity_refuses_everything() {
        let mut cache = TargetCache::new(0);
        let p = owner();
        assert_eq!(cache.add(p, "home", at(0.0)), AddOutcome::CapacityExceeded);
        assert!(cache.is_empty());
        assert_eq!(cache.owner_count(), 0);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut cache = TargetCache::new(2);
        let p = owner();
        cache.add(p, "Home", at(1.0));
        assert!(cache.get(&p, "home").is_none());
        assert_eq!(cache.add(p, "home", at(2.0)), AddOutcome::Inserted);
        assert_eq!(cache.len(&p), 2);
    }

    #[test]
    fn get_does_not_create_partition() {
        let cache = TargetCache::new(5);
        let p = owner();
        assert!(cache.get(&p, "anything").is_none());
        assert_eq!(cache.owner_count(), 0);
    }

    #[test]
    fn removing_last_target_drops_partition() {
        let mut cache = TargetCache::new(5);
        let p = owner();
        cache.add(p, "home", at(0.0));
        assert!(cache.remove(&p, "home"));
        assert_eq!(cache.owner_count(), 0);
        assert!(cache.list_all(&p).is_empty());
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut cache = TargetCache::new(5);
        let p = owner();
        assert!(!cache.remove(&p, "ghost"));
        cache.add(p, "home", at(0.0));
        assert!(!cache.remove(&p, "ghost"));
        assert_eq!(cache.len(&p), 1);
    }

    #[test]
    fn list_all_is_a_copy() {
        let mut cache = TargetCache::new(5);
        let p = owner();
        cache.add(p, "home", at(0.0));
        let mut listed = cache.list_all(&p);
        listed.insert("sneaky".into(), at(9.0));
        listed.remove("home");
        assert_eq!(cache.len(&p), 1);
        assert!(cache.get(&p, "home").is_some());
    }

    #[test]
    fn complete_matches_prefix_ignoring_case() {
        let mut cache = TargetCache::new(5);
        let p = owner();
        cache.add(p, "Base", at(0.0));
        cache.add(p, "barn", at(1.0));
        cache.add(p, "home", at(2.0));
        assert_eq!(cache.complete(&p, "ba"), vec!["Base", "barn"]);
        assert_eq!(cache.complete(&p, ""), vec!["Base", "barn", "home"]);
        assert!(cache.complete(&p, "x").is_empty());
        assert!(cache.complete(&owner(), "").is_empty());
    }

    #[test]
    fn partitions_are_independent() {
        let mut cache = TargetCache::new(1);
        let (a, b) = (owner(), owner());
        assert!(cache.add(a, "home", at(1.0)).is_success());
        assert!(cache.add(b, "home", at(2.0)).is_success());
        assert_eq!(cache.get(&a, "home"), Some(&at(1.0)));
        assert_eq!(cache.get(&b, "home"), Some(&at(2.0)));
        assert_eq!(cache.target_count(), 2);
    }
}
