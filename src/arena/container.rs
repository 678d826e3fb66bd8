use crate::core::{ArenaConfig, GameMode};
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The open-topped box bodies are dropped into
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Container {
    pub top_left: Vector2,
    pub top_right: Vector2,
    pub bottom_left: Vector2,
    pub bottom_right: Vector2,
}

impl Container {
    /// Creates a container from its four corners
    pub fn from_corners(top_left: Vector2, top_right: Vector2, bottom_left: Vector2, bottom_right: Vector2) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    /// Lays the container out for a game mode.
    ///
    /// The container is centered horizontally. In the single-container mode
    /// it stops `bottom_margin` above the bottom of the display; with floors
    /// it spans every floor.
    pub fn new(mode: GameMode, arena: &ArenaConfig) -> Self {
        let margin = (arena.display_width - arena.container_width) / 2.0;
        let left = margin;
        let right = arena.display_width - margin;
        let top = arena.top_margin;

        let bottom = match mode {
            GameMode::Ascending => arena.display_height - arena.bottom_margin,
            GameMode::Descending => {
                arena.top_margin + arena.floor_count as f32 * arena.floor_height
            }
        };

        Self::from_corners(
            Vector2::new(left, top),
            Vector2::new(right, top),
            Vector2::new(left, bottom),
            Vector2::new(right, bottom),
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.top_left.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.top_right.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top_left.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom_left.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right() - self.left()
    }

    /// Clamps an x coordinate so a circle of `radius` stays between the walls
    pub fn clamp_x(&self, x: f32, radius: f32) -> f32 {
        x.max(self.left() + radius).min(self.right() - radius)
    }
}
