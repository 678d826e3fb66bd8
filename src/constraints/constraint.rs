use crate::arena::{Container, Floor};
use crate::bodies::Body;
use crate::core::scene;

/// A positional clamp applied to one body at a time.
///
/// Every constraint is a projection: applying it twice leaves the body
/// where the first application put it.
pub trait Constraint {
    /// Moves the body back inside the allowed region
    fn apply(&self, body: &mut Body);
}

/// Keeps bodies below the top edge of the screen
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenConstraint;

impl Constraint for ScreenConstraint {
    fn apply(&self, body: &mut Body) {
        let radius = body.radius();
        let position = &mut body.kinematics.position;
        if position.y < radius {
            position.y = radius;
        }
    }
}

/// Keeps bodies between the container walls and above its bottom
#[derive(Debug, Clone, Copy)]
pub struct ContainerConstraint<'a> {
    container: &'a Container,
}

impl<'a> ContainerConstraint<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }
}

impl Constraint for ContainerConstraint<'_> {
    fn apply(&self, body: &mut Body) {
        let radius = body.radius();
        let position = &mut body.kinematics.position;

        position.x = self.container.clamp_x(position.x, radius);

        let floor = self.container.bottom() - radius;
        if position.y > floor {
            position.y = floor;
        }
    }
}

/// Rests bodies on the gate of the floor they are in, unless their rank is
/// small enough to pass through it
#[derive(Debug, Clone, Copy)]
pub struct FloorConstraint<'a> {
    floors: &'a [Floor],
    gate_height: f32,
}

impl<'a> FloorConstraint<'a> {
    pub fn new(floors: &'a [Floor], gate_height: f32) -> Self {
        Self { floors, gate_height }
    }
}

impl Constraint for FloorConstraint<'_> {
    fn apply(&self, body: &mut Body) {
        let Some(floor) = scene::floor_at(self.floors, body.position().y) else {
            return;
        };

        if floor.lets_through(body.rank()) {
            return;
        }

        let rest = floor.end_y - self.gate_height - body.radius();
        let position = &mut body.kinematics.position;
        if position.y > rest {
            position.y = rest;
        }
    }
}
