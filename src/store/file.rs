//! TOML file-backed [`TargetStore`].
//!
//! The file is reopened on every call; no handle is held between a load and a
//! save. Saves rewrite only the `players` section, keep any other top-level
//! sections, and land via a temporary sibling file plus rename.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{error, info, warn};

use super::codec::{self, PLAYERS_KEY};
use super::TargetStore;
use crate::error::StoreError;
use crate::targets::Dataset;

/// Seed written when the data file does not exist yet.
const DEFAULT_TEMPLATE: &str = include_str!("playerdata.toml");

/// Target data stored in a single TOML document on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file from the bundled template if it is missing.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        std::fs::write(&self.path, DEFAULT_TEMPLATE).map_err(|e| StoreError::io(&self.path, e))?;

        info!(path = %self.path.display(), "created target data file from template");
        Ok(())
    }

    fn read_document(&self) -> Result<Table, StoreError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        toml::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write `doc` to a temporary sibling, then rename it over the data file.
    fn write_document(&self, doc: &Table) -> Result<(), StoreError> {
        let rendered = toml::to_string_pretty(doc)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, rendered).map_err(|e| StoreError::io(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }

    fn try_save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let mut doc = if self.path.exists() {
            match self.read_document() {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(error = %e, "existing target data unreadable; rewriting from scratch");
                    Table::new()
                }
            }
        } else {
            Table::new()
        };

        let players = codec::encode_players(dataset)?;
        doc.insert(PLAYERS_KEY.to_string(), Value::Table(players));
        self.write_document(&doc)
    }
}

impl TargetStore for FileStore {
    fn load_all(&self) -> Dataset {
        if let Err(e) = self.ensure_initialized() {
            error!(error = %e, "could not initialize target data file");
            return Dataset::new();
        }

        match self.read_document() {
            Ok(doc) => {
                let dataset = codec::decode_players(&doc);
                tracing::debug!(path = %self.path.display(), owners = dataset.len(), "target data read");
                dataset
            }
            Err(e) => {
                error!(error = %e, "could not load target data; starting empty");
                Dataset::new()
            }
        }
    }

    fn save_all(&self, dataset: &Dataset) -> Result<(), StoreError> {
        self.try_save(dataset).inspect_err(|e| {
            error!(path = %self.path.display(), error = %e, "could not save target data");
        })
    }
}
