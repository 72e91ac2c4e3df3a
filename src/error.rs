//! Error types for the game core.
//!
//! The core has a deliberately small taxonomy: the only fatal condition is a
//! board configuration the rules cannot support. A full board during a tile
//! spawn is an informational outcome (`core::SpawnOutcome::BoardFull`), not
//! an error, and malformed input never reaches the core because the key map
//! rejects it at the boundary.

use thiserror::Error;

use crate::types::MIN_GRID_SIZE;

#[derive(Error, Debug)]
pub enum GameError {
    /// Requested grid size cannot host a game.
    #[error("invalid grid size {size}: the board needs at least {MIN_GRID_SIZE}x{MIN_GRID_SIZE} cells")]
    InvalidConfig { size: usize },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, GameError>;
