#![allow(dead_code)]

use std::sync::Mutex;

use lodestone::error::StoreError;
use lodestone::store::{FileStore, TargetStore};
use lodestone::targets::{Coordinate, Dataset, OwnerId};
use tempfile::TempDir;
use uuid::Uuid;

/// A fresh owner identity.
pub fn owner() -> OwnerId {
    OwnerId::new(Uuid::now_v7())
}

/// Coordinate in the overworld.
pub fn world(x: f64, y: f64, z: f64) -> Coordinate {
    Coordinate::new("world", x, y, z)
}

/// A file store inside a fresh temp dir. Keep the `TempDir` alive for the test.
pub fn temp_store() -> (TempDir, FileStore) {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path().join("playerdata.toml"));
    (tmp, store)
}

/// Store that keeps the last saved dataset in memory.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Dataset>,
}

impl MemoryStore {
    pub fn with(dataset: Dataset) -> Self {
        Self {
            data: Mutex::new(dataset),
        }
    }

    pub fn contents(&self) -> Dataset {
        self.data.lock().unwrap().clone()
    }
}

impl TargetStore for MemoryStore {
    fn load_all(&self) -> Dataset {
        self.contents()
    }

    fn save_all(&self, dataset: &Dataset) -> Result<(), StoreError> {
        *self.data.lock().unwrap() = dataset.clone();
        Ok(())
    }
}
