pub mod complete;
pub mod export;
pub mod list;
pub mod remove;
pub mod set;
pub mod stats;
pub mod track;

use anyhow::{Context, Result};

use lodestone::config::LodestoneConfig;
use lodestone::store::FileStore;
use lodestone::targets::TargetCache;

/// One process's worth of target state: the durable store and the cache loaded
/// from it. Owned by `main` and passed to each command explicitly.
pub struct Session {
    pub store: FileStore,
    pub cache: TargetCache,
}

impl Session {
    /// Bulk-load the cache from the configured data file.
    pub fn open(config: &LodestoneConfig) -> Self {
        let store = FileStore::new(config.resolved_data_path());
        let cache = TargetCache::load_from(&store, config.targets.max_targets);
        Self { store, cache }
    }

    /// Save (when anything changed) and release the cache.
    ///
    /// A failed save leaves the file as it was and is reported before the cache
    /// is dropped.
    pub fn shutdown(mut self, save: bool) -> Result<()> {
        if save {
            self.cache
                .save_all_to(&self.store)
                .with_context(|| format!("failed to save targets to {}", self.store.path().display()))?;
        }
        self.cache.clear_all();
        tracing::debug!("session closed");
        Ok(())
    }
}
