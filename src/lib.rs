pub mod math;
pub mod core;
pub mod bodies;
pub mod arena;
pub mod collision;
pub mod constraints;
pub mod integration;
pub mod game;

/// Re-export common types for easier usage
pub use crate::core::{ArenaConfig, BodyHandle, GameMode, GameWorld, SimulationConfig};
pub use crate::bodies::{Body, RankId, RankTable};
pub use crate::game::{GameHost, GameSession, Scoreboard};
pub use crate::math::Vector2;

/// Error types for the game core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum GameError {
        #[error("Invalid floor layout: {0}")]
        InvalidFloorLayout(String),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Invalid score entry: {0}")]
        InvalidScoreEntry(String),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Result type for game core operations
pub type Result<T> = std::result::Result<T, error::GameError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
