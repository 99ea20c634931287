use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use lodestone::targets::Coordinate;

use super::Session;

/// Export format: owner id → target name → coordinate, both levels sorted.
#[derive(Debug, Serialize)]
struct ExportData {
    owners: BTreeMap<String, BTreeMap<String, Coordinate>>,
}

/// Export every owner's targets as JSON to stdout.
pub fn export(session: &Session) -> Result<()> {
    let owners = session
        .cache
        .snapshot()
        .into_iter()
        .map(|(owner, targets)| (owner.to_string(), targets.into_iter().collect()))
        .collect();

    let data = ExportData { owners };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} targets for {} owners.",
        session.cache.target_count(),
        session.cache.owner_count()
    );

    Ok(())
}
