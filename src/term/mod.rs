//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the view maps snapshots into a
//! styled-character framebuffer, and the renderer flushes frames to the
//! terminal. The core stays deterministic and testable; everything here is
//! presentation.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
