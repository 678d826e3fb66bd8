use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::bodies::{Body, RankId, RankTable};
use crate::core::GameMode;
use crate::math::Vector2;

/// Hands out the next body to drop.
///
/// Only ranks that have been unlocked by a merge this round can be drawn,
/// and only from the mode's droppable half of the progression.
#[derive(Debug, Clone)]
pub struct RankUnlockFactory {
    mode: GameMode,
    unlocked: BTreeSet<RankId>,
    rng: StdRng,
}

impl RankUnlockFactory {
    /// Creates a factory seeded from the OS
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Creates a factory with a fixed seed
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        let mut factory = Self {
            mode,
            unlocked: BTreeSet::new(),
            rng,
        };
        factory.reset_for_mode();
        factory
    }

    /// Creates a pinned body of a random droppable rank at the top center.
    ///
    /// Draws uniformly among the unlocked ranks of the droppable range, which
    /// is the distribution of resampling until an unlocked rank comes up.
    pub fn generate_next(&mut self, width: f32, table: &RankTable) -> Body {
        let candidates: Vec<RankId> = self
            .mode
            .droppable_ranks()
            .filter_map(RankId::new)
            .filter(|rank| self.unlocked.contains(rank))
            .collect();

        let rank = candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(|| self.mode.starting_rank());

        Body::new_pinned(rank, Vector2::new(width / 2.0, 0.0), table)
    }

    /// Makes a rank droppable; returns `true` if it was locked
    pub fn unlock_rank(&mut self, rank: RankId) -> bool {
        let added = self.unlocked.insert(rank);
        if added {
            log::debug!("unlocked {}", rank);
        }
        added
    }

    /// Back to the mode's single starting rank
    pub fn reset_for_mode(&mut self) {
        self.unlocked.clear();
        self.unlocked.insert(self.mode.starting_rank());
    }

    #[inline]
    pub fn is_unlocked(&self, rank: RankId) -> bool {
        self.unlocked.contains(&rank)
    }

    /// Unlocked ranks, smallest first
    pub fn unlocked(&self) -> impl Iterator<Item = RankId> + '_ {
        self.unlocked.iter().copied()
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }
}
