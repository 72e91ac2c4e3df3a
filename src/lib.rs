//! Terminal 2048.
//!
//! The crate splits into a pure, deterministic core (`core`) and thin
//! boundary layers: `input` turns key presses into move intents, `term`
//! renders snapshots, and `storage` persists the single best-score integer.
//! The binary in `main.rs` wires them together.

pub mod core;
pub mod error;
pub mod input;
pub mod storage;
pub mod term;
pub mod types;
