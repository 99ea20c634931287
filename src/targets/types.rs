//! Core target type definitions.
//!
//! Defines [`OwnerId`] (the partition key), [`Coordinate`] (an opaque stored
//! position), and the [`Targets`] / [`Dataset`] map aliases shared by the cache
//! and the persistence layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One owner's targets, keyed by exact (case-sensitive) name.
pub type Targets = HashMap<String, Coordinate>;

/// Every owner partition held by a cache or returned by a store.
pub type Dataset = HashMap<OwnerId, Targets>;

/// Identity of the owner a target partition belongs to.
///
/// Always supplied by the caller; nothing in this crate generates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(Uuid);

impl OwnerId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for OwnerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for OwnerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored position: a point in a named world plus the facing angles.
///
/// The cache never interprets these values; it stores and returns them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Name of the world (spatial domain) the point lives in, e.g. `"world"`.
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Horizontal facing in degrees. Missing on disk reads as `0.0`.
    #[serde(default)]
    pub yaw: f32,
    /// Vertical facing in degrees. Missing on disk reads as `0.0`.
    #[serde(default)]
    pub pitch: f32,
}

impl Coordinate {
    /// A coordinate with zero yaw and pitch.
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn with_facing(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_round_trips_through_display() {
        let raw = "0f8fad5b-d9cb-469f-a165-70867728950e";
        let owner: OwnerId = raw.parse().unwrap();
        assert_eq!(owner.to_string(), raw);
    }

    #[test]
    fn owner_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<OwnerId>().is_err());
        assert!("".parse::<OwnerId>().is_err());
    }

    #[test]
    fn coordinate_defaults_missing_facing() {
        let coord: Coordinate =
            serde_json::from_str(r#"{"world":"world","x":1.0,"y":2.0,"z":3.0}"#).unwrap();
        assert_eq!(coord, Coordinate::new("world", 1.0, 2.0, 3.0));
    }

    #[test]
    fn coordinate_ignores_unknown_fields() {
        let coord: Coordinate = serde_json::from_str(
            r#"{"world":"nether","x":0,"y":64,"z":0,"yaw":90.0,"pitch":-10.0,"color":"red"}"#,
        )
        .unwrap();
        assert_eq!(
            coord,
            Coordinate::new("nether", 0.0, 64.0, 0.0).with_facing(90.0, -10.0)
        );
    }
}
