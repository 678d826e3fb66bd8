pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod scene;
pub mod score;

pub use self::world::GameWorld;
pub use self::config::{ArenaConfig, SimulationConfig};
pub use self::storage::BodyStorage;
pub use self::events::{EventQueue, GameEvent, DEFAULT_EVENT_CAPACITY};
pub use self::scene::Scene;
pub use self::score::Score;

use crate::bodies::RankId;
use std::ops::Range;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub(crate) u32);

/// The two ways of playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GameMode {
    /// Merges climb from Pluto towards the Sun inside a single container
    Ascending,

    /// Merges shrink from the Sun towards Pluto down a stack of gated floors
    Descending,
}

impl GameMode {
    /// The only rank unlocked at the start of a round
    pub fn starting_rank(self) -> RankId {
        match self {
            Self::Ascending => RankId::PLUTO,
            Self::Descending => RankId::SUN,
        }
    }

    /// Producing a body of this rank wins the round
    pub fn terminal_rank(self) -> RankId {
        match self {
            Self::Ascending => RankId::SUN,
            Self::Descending => RankId::PLUTO,
        }
    }

    /// Rank ordinals the next body to drop is drawn from
    pub fn droppable_ranks(self) -> Range<usize> {
        match self {
            Self::Ascending => 0..5,
            Self::Descending => 6..11,
        }
    }

    /// Rank produced by merging two bodies of `rank`, or `None` at the end of
    /// the progression
    pub fn merge_result(self, rank: RankId) -> Option<RankId> {
        match self {
            Self::Ascending => rank.next(),
            Self::Descending => rank.previous(),
        }
    }

    /// Whether floors and their gates take part in the simulation
    #[inline]
    pub fn has_floors(self) -> bool {
        self == Self::Descending
    }
}
