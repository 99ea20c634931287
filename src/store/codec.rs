//! Translation between the TOML `players` section and a [`Dataset`].
//!
//! Layout:
//!
//! ```toml
//! [players."0f8fad5b-d9cb-469f-a165-70867728950e".targets.home]
//! world = "world"
//! x = 10.5
//! y = 64.0
//! z = -3.0
//! yaw = 0.0
//! pitch = 0.0
//! ```
//!
//! Unknown keys anywhere in the document are ignored on read.

use toml::{Table, Value};
use tracing::warn;

use crate::targets::{Coordinate, Dataset, OwnerId, Targets};

/// Top-level section holding every owner.
pub const PLAYERS_KEY: &str = "players";

/// Per-owner subsection holding that owner's targets.
pub const TARGETS_KEY: &str = "targets";

/// Decode the `players` section of `doc`.
///
/// Owner keys that are not valid ids are skipped with a warning, as are target
/// records that fail to decode. Owners left with no decodable targets are omitted.
pub fn decode_players(doc: &Table) -> Dataset {
    let mut dataset = Dataset::new();

    let Some(players) = doc.get(PLAYERS_KEY).and_then(Value::as_table) else {
        return dataset;
    };

    for (key, section) in players {
        let owner = match key.parse::<OwnerId>() {
            Ok(owner) => owner,
            Err(e) => {
                warn!(owner = %key, error = %e, "skipping invalid owner id in target data");
                continue;
            }
        };

        let Some(records) = section.get(TARGETS_KEY).and_then(Value::as_table) else {
            continue;
        };

        let targets = decode_targets(&owner, records);
        if !targets.is_empty() {
            dataset.insert(owner, targets);
        }
    }

    dataset
}

fn decode_targets(owner: &OwnerId, records: &Table) -> Targets {
    let mut targets = Targets::with_capacity(records.len());
    for (name, record) in records {
        match record.clone().try_into::<Coordinate>() {
            Ok(coordinate) => {
                targets.insert(name.clone(), coordinate);
            }
            Err(e) => {
                warn!(%owner, target_name = %name, error = %e, "skipping malformed coordinate record");
            }
        }
    }
    targets
}

/// Encode `dataset` as a fresh `players` table, leaving out empty owners.
pub fn encode_players(dataset: &Dataset) -> Result<Table, toml::ser::Error> {
    let mut players = Table::new();

    for (owner, targets) in dataset {
        if targets.is_empty() {
            continue;
        }

        let mut records = Table::new();
        for (name, coordinate) in targets {
            records.insert(name.clone(), Value::try_from(coordinate)?);
        }

        let mut section = Table::new();
        section.insert(TARGETS_KEY.to_string(), Value::Table(records));
        players.insert(owner.to_string(), Value::Table(section));
    }

    Ok(players)
}
