use lodestone::targets::OwnerId;

use super::Session;

pub fn track(session: &Session, owner: OwnerId, name: &str) {
    match session.cache.get(&owner, name) {
        Some(c) => println!(
            "Tracking '{name}' at X:{:.0} Y:{:.0} Z:{:.0} in {}",
            c.x, c.y, c.z, c.world
        ),
        None => println!("Target '{name}' not found."),
    }
}
