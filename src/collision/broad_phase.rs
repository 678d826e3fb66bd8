use crate::bodies::Body;
use crate::collision::collision_pair::CollisionPair;
use crate::core::{BodyHandle, BodyStorage};
use crate::math::Aabb;

/// Cheap first filter of collision detection.
///
/// Implementations may report pairs that do not touch, never the reverse.
pub trait BroadPhase {
    /// Snapshots the bounds of the bodies that can collide
    fn update(&mut self, bodies: &BodyStorage<Body>);

    /// Candidate pairs from the last snapshot, in scene order
    fn get_collision_pairs(&self) -> Vec<CollisionPair>;
}

/// Tests every pair of bounding boxes.
///
/// Pinned bodies are left out entirely, so a body being aimed never shows
/// up in a pair no matter what it overlaps.
#[derive(Debug, Default)]
pub struct BruteForceBroadPhase {
    /// Free bodies and their bounding boxes, in scene order
    bodies: Vec<(BodyHandle, Aabb)>,
}

impl BruteForceBroadPhase {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
        }
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn update(&mut self, bodies: &BodyStorage<Body>) {
        self.bodies.clear();

        for (handle, body) in bodies.iter() {
            if !body.is_pinned() {
                self.bodies.push((handle, body.aabb()));
            }
        }
    }

    fn get_collision_pairs(&self) -> Vec<CollisionPair> {
        let mut pairs = Vec::new();

        for (i, (first, first_box)) in self.bodies.iter().enumerate() {
            for (second, second_box) in &self.bodies[i + 1..] {
                if first_box.intersects(second_box) {
                    pairs.push(CollisionPair::new(*first, *second));
                }
            }
        }

        pairs
    }
}
