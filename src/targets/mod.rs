pub mod cache;
pub mod types;

pub use cache::{AddOutcome, TargetCache};
pub use types::{Coordinate, Dataset, OwnerId, Targets};

/// Supplies an owner's current position when recording a target "here".
///
/// Implemented by whatever host knows where owners are.
pub trait Locator {
    fn current_coordinate_of(&self, owner: &OwnerId) -> Coordinate;
}
