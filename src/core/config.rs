use crate::error::GameError;
use crate::integration::VerletParams;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the simulation and the game rules.
///
/// The defaults are hand-tuned; gameplay feel depends on these exact values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Friction and gravity for the Verlet step
    pub verlet: VerletParams,

    /// Share of the overlap removed by a single correction step
    pub overlap_correction_factor: f32,

    /// Minimum relative normal velocity for a bounce
    pub bounce_velocity_threshold: f32,

    /// Distance each body is nudged along the normal when bouncing
    pub bounce_impulse: f32,

    /// Constraint + detection rounds per frame
    pub collision_iterations: u32,

    /// Cap on back-to-back detection passes while merges keep happening
    pub max_merge_passes: u32,

    /// How far above the container top a collided body may poke before the round is lost
    pub loss_tolerance: f32,

    /// Distance below the container top at which the end line is shown
    pub end_line_threshold: f32,

    /// Height of the solid gate at the bottom of each floor
    pub floor_gate_height: f32,

    /// Seconds between a drop and the next body becoming aimable
    pub click_delay: f32,

    /// Points for merging two bodies of the largest rank
    pub largest_body_bonus: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            verlet: VerletParams::default(),
            overlap_correction_factor: 0.5,
            bounce_velocity_threshold: 0.8,
            bounce_impulse: 0.1,
            collision_iterations: 8,
            max_merge_passes: 32,
            loss_tolerance: 5.0,
            end_line_threshold: 70.0,
            floor_gate_height: 50.0,
            click_delay: 0.5,
            largest_body_bonus: 100,
        }
    }
}

impl SimulationConfig {
    /// Rejects values that would stall or break the simulation
    pub fn validate(&self) -> Result<()> {
        if self.collision_iterations == 0 {
            return Err(GameError::InvalidParameter("collision_iterations must be at least 1".into()));
        }
        if self.max_merge_passes == 0 {
            return Err(GameError::InvalidParameter("max_merge_passes must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.overlap_correction_factor) {
            return Err(GameError::InvalidParameter(format!(
                "overlap_correction_factor must be in [0, 1], got {}",
                self.overlap_correction_factor
            )));
        }
        if self.click_delay < 0.0 {
            return Err(GameError::InvalidParameter("click_delay must not be negative".into()));
        }
        Ok(())
    }
}

/// Layout of the play area
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ArenaConfig {
    /// Width of the visible area; new bodies spawn at its horizontal center
    pub display_width: f32,

    /// Height of the visible area
    pub display_height: f32,

    /// Inner width of the container
    pub container_width: f32,

    /// Distance from the top of the screen to the container top
    pub top_margin: f32,

    /// Gap below the container in the single-container mode
    pub bottom_margin: f32,

    /// Height of each floor in the floors mode
    pub floor_height: f32,

    /// Number of floors in the floors mode
    pub floor_count: usize,

    /// Number of ranks settled on each floor, top to bottom
    pub ranks_per_floor: Vec<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            display_width: 800.0,
            display_height: 900.0,
            container_width: 450.0,
            top_margin: 120.0,
            bottom_margin: 70.0,
            floor_height: 700.0,
            floor_count: 4,
            ranks_per_floor: vec![3, 3, 4, 1],
        }
    }
}

impl ArenaConfig {
    /// Rejects degenerate dimensions
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("display_width", self.display_width),
            ("display_height", self.display_height),
            ("container_width", self.container_width),
            ("floor_height", self.floor_height),
        ];
        for (name, value) in dimensions {
            if value <= 0.0 {
                return Err(GameError::InvalidParameter(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.container_width > self.display_width {
            return Err(GameError::InvalidParameter(format!(
                "container_width {} does not fit display_width {}",
                self.container_width, self.display_width
            )));
        }
        Ok(())
    }
}
