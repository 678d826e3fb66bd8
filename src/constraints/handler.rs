use crate::constraints::{Constraint, ContainerConstraint, FloorConstraint, ScreenConstraint};
use crate::core::Scene;

/// Applies every boundary constraint to every body of a scene.
///
/// The floor constraint only has an effect when the scene has floors.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintHandler {
    gate_height: f32,
}

impl ConstraintHandler {
    pub fn new(gate_height: f32) -> Self {
        Self { gate_height }
    }

    /// Clamps all bodies, screen first, then container, then floor
    pub fn apply_all(&self, scene: &mut Scene) {
        let (bodies, container, floors) = scene.split_mut();

        let screen = ScreenConstraint;
        let walls = ContainerConstraint::new(container);
        let floor = FloorConstraint::new(floors, self.gate_height);

        let constraints: [&dyn Constraint; 3] = [&screen, &walls, &floor];

        for (_, body) in bodies.iter_mut() {
            for constraint in constraints {
                constraint.apply(body);
            }
        }
    }

    #[inline]
    pub fn gate_height(&self) -> f32 {
        self.gate_height
    }
}
