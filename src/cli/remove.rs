use lodestone::targets::OwnerId;

use super::Session;

/// Delete `name` for the owner. Returns whether the cache changed.
pub fn remove(session: &mut Session, owner: OwnerId, name: &str) -> bool {
    if session.cache.remove(&owner, name) {
        println!("Target '{name}' has been removed.");
        true
    } else {
        println!("Target '{name}' not found.");
        false
    }
}
