use crate::arena::{Container, Floor};
use crate::bodies::Body;
use crate::core::{BodyHandle, BodyStorage};
use crate::integration::VerletParams;

/// Everything that exists in the play area: the live bodies, the container
/// and, in the floors mode, the floors.
///
/// The container and floors are fixed for a session; only bodies come and go.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: BodyStorage<Body>,
    floors: Vec<Floor>,
    container: Container,
}

impl Scene {
    /// Creates an empty scene inside a container
    pub fn new(container: Container) -> Self {
        Self::with_floors(container, Vec::new())
    }

    /// Creates an empty scene with floors
    pub fn with_floors(container: Container, floors: Vec<Floor>) -> Self {
        Self {
            bodies: BodyStorage::new(),
            floors,
            container,
        }
    }

    /// Adds a body and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Removes a body by handle
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<Body> {
        self.bodies.remove(handle)
    }

    /// Gets a body by handle
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Gets a mutable body by handle
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Read-only access to the bodies, in insertion order
    pub fn bodies(&self) -> &BodyStorage<Body> {
        &self.bodies
    }

    /// Mutable access to the bodies
    pub fn bodies_mut(&mut self) -> &mut BodyStorage<Body> {
        &mut self.bodies
    }

    /// Bodies together with the boundaries they are clamped against
    pub fn split_mut(&mut self) -> (&mut BodyStorage<Body>, &Container, &[Floor]) {
        (&mut self.bodies, &self.container, &self.floors)
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Removes every body; the container and floors stay
    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    /// The container bodies are kept inside
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Floors from top to bottom; empty when the mode has none
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// The first floor whose vertical span contains `y`
    pub fn floor_at(&self, y: f32) -> Option<&Floor> {
        floor_at(&self.floors, y)
    }

    /// Advances every body by one integration step
    pub fn update(&mut self, params: &VerletParams) {
        for (_, body) in self.bodies.iter_mut() {
            body.update(params);
        }
    }
}

/// The first floor in `floors` whose vertical span contains `y`
pub fn floor_at(floors: &[Floor], y: f32) -> Option<&Floor> {
    floors.iter().find(|f| f.contains_y(y))
}
