//! Durable storage for the full owner → targets dataset.
//!
//! A [`TargetStore`] only moves whole datasets: [`TargetStore::load_all`] at
//! startup, [`TargetStore::save_all`] at shutdown. It holds no reference to the
//! cache between calls and is never consulted for individual reads.
//!
//! [`FileStore`] is the on-disk implementation, backed by a TOML document (see
//! [`codec`] for the layout).

pub mod codec;
pub mod file;

pub use file::FileStore;

use crate::error::StoreError;
use crate::targets::Dataset;

/// Bulk load/save contract between the cache and durable storage.
pub trait TargetStore {
    /// Best-effort reconstruction of everything stored.
    ///
    /// Never fails: undecodable records are skipped and an unreadable store
    /// yields whatever could be recovered, possibly nothing.
    fn load_all(&self) -> Dataset;

    /// Replace the stored dataset with `dataset`. Owners with no targets are
    /// not written.
    fn save_all(&self, dataset: &Dataset) -> Result<(), StoreError>;
}
