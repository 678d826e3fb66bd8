use crate::bodies::{RankId, RANK_COUNT};
use crate::error::GameError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Fewest floors a layout may have
pub const MIN_FLOORS: usize = 2;

/// Most floors a layout may have
pub const MAX_FLOORS: usize = 10;

/// Threshold of the bottom floor, which lets nothing through
pub const NO_GATE: i32 = -1;

/// One level of the multi-floor funnel.
///
/// The bottom `gate_height` of a floor is solid for every rank above
/// `next_rank_threshold`; smaller ranks fall through to the floor below.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Floor {
    pub start_y: f32,
    pub end_y: f32,
    pub index: usize,
    pub next_rank_threshold: i32,
}

impl Floor {
    /// Whether `y` lies within this floor, bounds included
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        self.start_y <= y && y <= self.end_y
    }

    /// Whether a body of this rank falls through the gate
    #[inline]
    pub fn lets_through(&self, rank: RankId) -> bool {
        (rank.index() as i32) <= self.next_rank_threshold
    }

    /// The bottom floor has no gate to pass
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next_rank_threshold < 0
    }

    /// Builds the floors of the descending mode.
    ///
    /// `ranks_per_floor[i]` is how many ranks come to rest on floor `i`.
    /// The counts must cover every rank exactly once, there must be between
    /// [`MIN_FLOORS`] and [`MAX_FLOORS`] floors, no floor may be empty and the
    /// last one holds exactly one rank.
    pub fn layout(
        floor_count: usize,
        ranks_per_floor: &[usize],
        floor_height: f32,
        top_margin: f32,
    ) -> Result<Vec<Floor>> {
        validate_layout(floor_count, ranks_per_floor)?;

        let highest = (RANK_COUNT - 1) as i32;
        let mut threshold = highest - ranks_per_floor[0] as i32;
        let mut floors = Vec::with_capacity(floor_count);

        for i in 0..floor_count {
            floors.push(Floor {
                start_y: i as f32 * floor_height + top_margin,
                end_y: (i + 1) as f32 * floor_height + top_margin,
                index: i,
                next_rank_threshold: threshold,
            });

            threshold = if threshold > 0 && i + 1 < floor_count {
                threshold - ranks_per_floor[i + 1] as i32
            } else {
                NO_GATE
            };
        }

        Ok(floors)
    }
}

fn validate_layout(floor_count: usize, ranks_per_floor: &[usize]) -> Result<()> {
    if !(MIN_FLOORS..=MAX_FLOORS).contains(&floor_count) {
        return Err(GameError::InvalidFloorLayout(format!(
            "floor count must be between {} and {}, got {}",
            MIN_FLOORS, MAX_FLOORS, floor_count
        )));
    }

    if ranks_per_floor.len() != floor_count {
        return Err(GameError::InvalidFloorLayout(format!(
            "{} rank counts given for {} floors",
            ranks_per_floor.len(),
            floor_count
        )));
    }

    if let Some(empty) = ranks_per_floor.iter().position(|&n| n == 0) {
        return Err(GameError::InvalidFloorLayout(format!("floor {} holds no ranks", empty)));
    }

    let total: usize = ranks_per_floor.iter().sum();
    if total != RANK_COUNT {
        return Err(GameError::InvalidFloorLayout(format!(
            "rank counts sum to {}, expected {}",
            total, RANK_COUNT
        )));
    }

    if ranks_per_floor[floor_count - 1] != 1 {
        return Err(GameError::InvalidFloorLayout(format!(
            "last floor must hold exactly one rank, got {}",
            ranks_per_floor[floor_count - 1]
        )));
    }

    Ok(())
}
