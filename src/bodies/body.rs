use crate::bodies::{RankId, RankTable};
use crate::integration::{self, VerletParams, VerletState};
use crate::math::{Aabb, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A planet: a Verlet point mass with a rank-derived radius and score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// Integrated kinematic state
    pub kinematics: VerletState,

    rank: RankId,
    radius: f32,
    score: u32,
    has_collided: bool,
}

impl Body {
    /// Creates a free body of the given rank at a position
    pub fn new(rank: RankId, position: Vector2, table: &RankTable) -> Self {
        let radius = table.radius(rank);
        Self {
            kinematics: VerletState::new(position, radius),
            rank,
            radius,
            score: table.score(rank),
            has_collided: false,
        }
    }

    /// Creates a pinned body, held in place until released
    pub fn new_pinned(rank: RankId, position: Vector2, table: &RankTable) -> Self {
        let mut body = Self::new(rank, position, table);
        body.kinematics.pinned = true;
        body
    }

    /// Advances the body by one integration step
    #[inline]
    pub fn update(&mut self, params: &VerletParams) {
        integration::integrate(&mut self.kinematics, params);
    }

    /// Rank of the body
    #[inline]
    pub fn rank(&self) -> RankId {
        self.rank
    }

    /// Radius derived from the rank
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Points this body is worth when it is produced by a merge
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Mass derived from the radius
    #[inline]
    pub fn mass(&self) -> f32 {
        self.kinematics.mass()
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> Vector2 {
        self.kinematics.position
    }

    /// Velocity from the last integration step
    #[inline]
    pub fn velocity(&self) -> Vector2 {
        self.kinematics.velocity
    }

    /// Whether the body is held in place
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.kinematics.pinned
    }

    /// Holds or releases the body
    pub fn set_pinned(&mut self, pinned: bool) {
        self.kinematics.pinned = pinned;
    }

    /// Whether the body has ever bounced off another body.
    ///
    /// Only such bodies can lose the game; the flag is never cleared.
    #[inline]
    pub fn has_collided(&self) -> bool {
        self.has_collided
    }

    /// Sets the collided flag
    pub fn mark_collided(&mut self) {
        self.has_collided = true;
    }

    /// Bounding box of the body's circle
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_circle(self.kinematics.position, self.radius)
    }
}
