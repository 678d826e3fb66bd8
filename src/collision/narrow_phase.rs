use crate::bodies::Body;
use crate::collision::collision_pair::CollisionPair;
use crate::core::BodyStorage;

/// Trait for narrow-phase collision detection algorithms
pub trait NarrowPhase {
    /// Keeps the candidate pairs whose bodies actually touch
    fn detect_collisions(&self, pairs: &[CollisionPair], bodies: &BodyStorage<Body>) -> Vec<CollisionPair>;
}

/// Exact circle-circle test on current positions
#[derive(Debug, Default, Clone, Copy)]
pub struct CircleNarrowPhase;

impl CircleNarrowPhase {
    /// Creates a new circle narrow-phase
    pub fn new() -> Self {
        Self
    }
}

impl NarrowPhase for CircleNarrowPhase {
    fn detect_collisions(&self, pairs: &[CollisionPair], bodies: &BodyStorage<Body>) -> Vec<CollisionPair> {
        pairs
            .iter()
            .filter(|pair| match (bodies.get(pair.body_a), bodies.get(pair.body_b)) {
                (Some(a), Some(b)) => circles_touch(a, b),
                _ => false,
            })
            .copied()
            .collect()
    }
}

/// Whether two bodies overlap or touch
#[inline]
pub fn circles_touch(a: &Body, b: &Body) -> bool {
    let reach = a.radius() + b.radius();
    (a.position() - b.position()).norm_squared() <= reach * reach
}
