//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and a framebuffer renderer for drawing. The
//! event loop blocks on key presses: slides are discrete, so there is no
//! tick timer, and the board is redrawn once per event.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::storage::BestScoreStore;
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::DEFAULT_GRID_SIZE;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = BestScoreStore::new(BestScoreStore::default_path());
    let mut persisted_best = store.load().unwrap_or(0);

    let mut game = GameState::new(DEFAULT_GRID_SIZE, clock_seed())?;
    game.set_best_score(persisted_best);

    let view = GameView::default();
    let mut snapshot = GameSnapshot::new(game.size());

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);

                    if game.best_score() > persisted_best {
                        // Best effort: a failed write retries on the next
                        // improvement.
                        if store.save(game.best_score()).is_ok() {
                            persisted_best = game.best_score();
                        }
                    }
                }
            }
            Event::Resize(_, _) => {
                // Next pass redraws at the new size.
            }
            _ => {}
        }
    }
}

/// Wall-clock seed so each session plays a different game.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
