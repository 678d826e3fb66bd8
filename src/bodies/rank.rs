use std::fmt;

use crate::error::GameError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Number of ranks in the progression
pub const RANK_COUNT: usize = 11;

const RANK_NAMES: [&str; RANK_COUNT] = [
    "Pluto", "Moon", "Mercury", "Mars", "Venus", "Earth",
    "Neptune", "Uranus", "Saturn", "Jupiter", "Sun",
];

/// Discrete size level of a body, from the smallest (Pluto) to the largest (Sun)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RankId(u8);

impl RankId {
    pub const PLUTO: Self = Self(0);
    pub const MOON: Self = Self(1);
    pub const MERCURY: Self = Self(2);
    pub const MARS: Self = Self(3);
    pub const VENUS: Self = Self(4);
    pub const EARTH: Self = Self(5);
    pub const NEPTUNE: Self = Self(6);
    pub const URANUS: Self = Self(7);
    pub const SATURN: Self = Self(8);
    pub const JUPITER: Self = Self(9);
    pub const SUN: Self = Self(10);

    /// Lowest rank
    pub const MIN: Self = Self::PLUTO;

    /// Highest rank
    pub const MAX: Self = Self::SUN;

    /// Returns the rank with the given ordinal, if it exists
    #[inline]
    pub fn new(index: usize) -> Option<Self> {
        (index < RANK_COUNT).then(|| Self(index as u8))
    }

    /// Returns the ordinal of the rank
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The next larger rank, or `None` past the Sun
    #[inline]
    pub fn next(self) -> Option<Self> {
        Self::new(self.index() + 1)
    }

    /// The next smaller rank, or `None` below Pluto
    #[inline]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self(i as u8))
    }

    /// Human readable name of the rank
    pub fn name(self) -> &'static str {
        RANK_NAMES[self.index()]
    }

    /// Iterates every rank from smallest to largest
    pub fn all() -> impl Iterator<Item = RankId> {
        (0..RANK_COUNT).map(|i| Self(i as u8))
    }
}

impl fmt::Display for RankId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable radius and score lookup per rank
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RankTable {
    radii: [f32; RANK_COUNT],
    scores: [u32; RANK_COUNT],
}

impl RankTable {
    /// Creates a table from explicit radius and score columns.
    ///
    /// Every radius must be positive and finite.
    pub fn new(radii: [f32; RANK_COUNT], scores: [u32; RANK_COUNT]) -> Result<Self> {
        let table = Self { radii, scores };
        table.validate()?;
        Ok(table)
    }

    /// Checks that every rank has a usable radius
    pub fn validate(&self) -> Result<()> {
        for rank in RankId::all() {
            let radius = self.radius(rank);
            if !(radius.is_finite() && radius > 0.0) {
                return Err(GameError::InvalidParameter(format!(
                    "radius of {} must be positive, got {}",
                    rank, radius
                )));
            }
        }
        Ok(())
    }

    /// Radius of a body of the given rank
    #[inline]
    pub fn radius(&self, rank: RankId) -> f32 {
        self.radii[rank.index()]
    }

    /// Points awarded when a body of the given rank is created by a merge
    #[inline]
    pub fn score(&self, rank: RankId) -> u32 {
        self.scores[rank.index()]
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self {
            radii: [40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0],
            scores: [10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30],
        }
    }
}
