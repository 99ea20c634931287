//! Named coordinate targets, partitioned by owner and bounded per owner.
//!
//! Each owner (a UUID identity supplied by the host) keeps a small set of named
//! [`Coordinate`](targets::Coordinate)s. At most `max_targets` distinct names may
//! exist per owner; re-saving an existing name always succeeds.
//!
//! # Lifecycle
//!
//! 1. Construct a [`TargetCache`](targets::TargetCache) with
//!    [`TargetCache::load_from`](targets::TargetCache::load_from), which bulk-loads
//!    every owner from a [`TargetStore`](store::TargetStore).
//! 2. Serve any number of `add` / `remove` / `get` / `list_all` calls from memory.
//! 3. At shutdown, [`save_all_to`](targets::TargetCache::save_all_to) the store,
//!    then [`clear_all`](targets::TargetCache::clear_all).
//!
//! Nothing is written between steps 1 and 3, so a crash in between loses every
//! change made since the last save.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — Persistence error type
//! - [`store`] — Bulk load/save contract and the TOML file implementation
//! - [`targets`] — Owner/coordinate types and the capacity-bounded cache

pub mod config;
pub mod error;
pub mod store;
pub mod targets;
