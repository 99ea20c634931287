use lodestone::targets::{Coordinate, Locator, OwnerId};

use super::Session;

/// The position the host reports for the invoking owner.
pub struct HostPosition {
    coordinate: Coordinate,
}

impl HostPosition {
    pub fn new(world: String, x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Self {
        Self {
            coordinate: Coordinate::new(world, x, y, z).with_facing(yaw, pitch),
        }
    }
}

impl Locator for HostPosition {
    fn current_coordinate_of(&self, _owner: &OwnerId) -> Coordinate {
        self.coordinate.clone()
    }
}

/// Save the owner's current position as `name`. Returns whether the cache changed.
pub fn set(session: &mut Session, owner: OwnerId, name: &str, here: &dyn Locator) -> bool {
    let outcome = session.cache.add_here(owner, name, here);
    tracing::debug!(%owner, target_name = %name, ?outcome, "set target");

    if outcome.is_success() {
        println!("Target '{name}' set to your current location.");
        true
    } else {
        println!(
            "You have reached the maximum number of targets ({}).",
            session.cache.max_targets()
        );
        false
    }
}
