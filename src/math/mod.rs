mod aabb;

pub use aabb::Aabb;

/// 2D vector type used for every position and velocity in the simulation
pub type Vector2 = nalgebra::Vector2<f32>;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    approx_eq(a, 0.0)
}

/// Returns the unit vector pointing from `to` towards `from`.
///
/// Coincident points have no direction; in that case `fallback` is returned
/// so callers never divide by zero.
#[inline]
pub fn direction_or(from: &Vector2, to: &Vector2, fallback: Vector2) -> Vector2 {
    (from - to).try_normalize(EPSILON).unwrap_or(fallback)
}

/// Midpoint between two points
#[inline]
pub fn midpoint(a: &Vector2, b: &Vector2) -> Vector2 {
    (a + b) * 0.5
}
