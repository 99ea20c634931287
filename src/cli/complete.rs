use lodestone::targets::OwnerId;

use super::Session;

pub fn complete(session: &Session, owner: OwnerId, prefix: &str) {
    for name in session.cache.complete(&owner, prefix) {
        println!("{name}");
    }
}
