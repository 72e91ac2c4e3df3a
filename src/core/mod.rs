//! Core module - pure game logic with no I/O dependencies
//!
//! This module contains the board, the slide/merge rules, scoring, and the
//! engine that ties them together. It has zero dependencies on UI, storage,
//! or the terminal, and is deterministic under an injected random source.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod slide;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, MoveOutcome, SpawnOutcome};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::ScoreBoard;
pub use slide::{compress_and_merge, line_cell, LineResult};
pub use snapshot::GameSnapshot;
