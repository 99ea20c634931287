use lodestone::targets::OwnerId;

use super::Session;

/// Print the owner's targets, sorted by name.
pub fn list(session: &Session, owner: OwnerId) {
    let targets = session.cache.list_all(&owner);

    if targets.is_empty() {
        println!("You have no saved targets.");
        return;
    }

    let mut entries: Vec<_> = targets.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    println!("Your saved targets:");
    for (name, c) in entries {
        println!(
            "- {name}: X:{:.1}, Y:{:.1}, Z:{:.1} in {}",
            c.x, c.y, c.z, c.world
        );
    }
}
