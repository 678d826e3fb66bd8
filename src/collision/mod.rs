mod collision_pair;
mod broad_phase;
mod narrow_phase;
mod resolver;
mod manager;

pub use self::collision_pair::CollisionPair;
pub use self::broad_phase::{BroadPhase, BruteForceBroadPhase};
pub use self::narrow_phase::{circles_touch, CircleNarrowPhase, NarrowPhase};
pub use self::resolver::{correct_overlap, simulate_bounce, CollisionResolver, ResolveContext};
pub use self::manager::CollisionManager;
