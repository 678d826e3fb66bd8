use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Tuning for the position-based Verlet step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct VerletParams {
    /// Damping applied to the implicit velocity every step
    pub friction: f32,

    /// Constant displacement added every step (screen space, y grows downward)
    pub gravity: Vector2,
}

impl Default for VerletParams {
    fn default() -> Self {
        Self {
            friction: 0.8,
            gravity: Vector2::new(0.0, 2.5),
        }
    }
}

/// Kinematic state of a point mass advanced by Verlet integration.
///
/// Velocity is never integrated on its own: it is recomputed from the last
/// displacement on every step, so it always lags one step behind. Anything
/// that writes `position` directly (overlap correction, bounces, aiming)
/// feeds into the next step's velocity for free.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct VerletState {
    /// Current position
    pub position: Vector2,

    /// Position before the last step
    pub previous_position: Vector2,

    /// Damped displacement of the last step
    pub velocity: Vector2,

    /// Pinned points are skipped by the integrator
    pub pinned: bool,

    mass: f32,
}

impl VerletState {
    /// Creates a resting point whose mass is derived from its radius
    pub fn new(position: Vector2, radius: f32) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: Vector2::zeros(),
            pinned: false,
            mass: radius / 10.0,
        }
    }

    /// Returns the mass of the point
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Moves the point without giving it any velocity
    pub fn teleport(&mut self, position: Vector2) {
        self.position = position;
        self.previous_position = position;
    }
}

/// Advances a point by one Störmer-Verlet step.
///
/// `velocity = (position - previous) * friction`, then
/// `position += velocity + gravity`. Pinned points are left untouched.
pub fn integrate(state: &mut VerletState, params: &VerletParams) {
    if state.pinned {
        return;
    }

    state.velocity = (state.position - state.previous_position) * params.friction;
    state.previous_position = state.position;
    state.position += state.velocity + params.gravity;
}
