//! Game state module - the board engine
//!
//! Ties the core components together: board, slide pass, scoring, and the
//! random capability. One `GameState` owns one grid; there is no global
//! instance. All operations are synchronous and run to completion, and the
//! engine has exactly two phases: playing and game over.

use crate::core::slide::{compress_and_merge, line_cell};
use crate::core::snapshot::GameSnapshot;
use crate::core::{Board, RandomSource, ScoreBoard, SimpleRng};
use crate::error::{GameError, Result};
use crate::types::{
    Direction, GameAction, Position, MIN_GRID_SIZE, STARTING_TILES, TWO_TILE_PROBABILITY,
};

/// What one slide did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any line changed. An unchanged slide spawns nothing and
    /// scores nothing.
    pub changed: bool,
    /// Merge points accrued by this move.
    pub score_delta: u32,
    /// Where the follow-up tile landed, if one was spawned.
    pub new_tile: Option<Position>,
}

impl MoveOutcome {
    /// The outcome of a slide that did nothing.
    pub const fn unchanged() -> Self {
        Self {
            changed: false,
            score_delta: 0,
            new_tile: None,
        }
    }
}

/// Result of a spawn attempt. A full board is informational, not an error:
/// the engine uses it to decide when terminal-state detection is worth
/// running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned(Position),
    BoardFull,
}

/// Complete game state, generic over the injected random capability.
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    board: Board,
    scores: ScoreBoard,
    rng: R,
    game_over: bool,
    /// Scratch line reused by every slide pass.
    line_buf: Vec<u32>,
}

impl GameState<SimpleRng> {
    /// Start a new game on a `size` x `size` board with a seeded default
    /// generator. Fails with `InvalidConfig` for boards below 2x2, leaving
    /// no state behind.
    pub fn new(size: usize, seed: u32) -> Result<Self> {
        Self::with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a new game with an injected random source.
    pub fn with_rng(size: usize, rng: R) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig { size });
        }

        let mut state = Self {
            board: Board::new(size),
            scores: ScoreBoard::new(0),
            rng,
            game_over: false,
            line_buf: vec![0; size],
        };
        for _ in 0..STARTING_TILES {
            state.spawn_tile();
        }
        Ok(state)
    }

    /// Resume from a prepared board position (no starting tiles spawned).
    /// The terminal flag is evaluated from the position itself.
    pub fn with_board(board: Board, rng: R) -> Result<Self> {
        let size = board.size();
        if size < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig { size });
        }

        let mut state = Self {
            board,
            scores: ScoreBoard::new(0),
            rng,
            game_over: false,
            line_buf: vec![0; size],
        };
        state.game_over = state.check_game_over();
        Ok(state)
    }

    /// Reset the board and session score and spawn the starting tiles.
    /// The best score and the random stream carry over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.scores.start_session();
        self.game_over = false;
        for _ in 0..STARTING_TILES {
            self.spawn_tile();
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    /// Best-score candidate: `max(persisted best, session score)`.
    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    /// Seed the best score from external persistence. Only raises.
    pub fn set_best_score(&mut self, best: u32) {
        self.scores.set_best(best);
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Place one tile on a uniformly random empty cell: a 2 with
    /// probability 0.9, otherwise a 4. No-op on a full board.
    ///
    /// Draw order is fixed (cell first, then value) so seeded replays are
    /// stable.
    pub fn spawn_tile(&mut self) -> SpawnOutcome {
        let empty = self.board.empty_positions();
        if empty.is_empty() {
            return SpawnOutcome::BoardFull;
        }

        let pos = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_f32() < TWO_TILE_PROBABILITY {
            2
        } else {
            4
        };
        self.board.set(pos.x, pos.y, value);
        SpawnOutcome::Spawned(pos)
    }

    /// Execute one move: compress and merge every line toward `dir`, and if
    /// anything changed, accrue the merge points, spawn exactly one tile,
    /// and re-evaluate the terminal state. Once the game is over, slides
    /// are no-ops until `restart`.
    pub fn slide(&mut self, dir: Direction) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::unchanged();
        }

        let n = self.board.size();
        let mut changed = false;
        let mut score_delta = 0;

        for line in 0..n {
            for offset in 0..n {
                let p = line_cell(dir, line, offset, n);
                self.line_buf[offset] = self.board.get(p.x, p.y).unwrap_or(0);
            }

            let result = compress_and_merge(&mut self.line_buf);
            if result.changed {
                changed = true;
                for offset in 0..n {
                    let p = line_cell(dir, line, offset, n);
                    self.board.set(p.x, p.y, self.line_buf[offset]);
                }
            }
            score_delta += result.score_delta;
        }

        if !changed {
            return MoveOutcome::unchanged();
        }

        self.scores.accrue(score_delta);
        let new_tile = match self.spawn_tile() {
            SpawnOutcome::Spawned(pos) => Some(pos),
            SpawnOutcome::BoardFull => None,
        };
        if self.check_game_over() {
            self.game_over = true;
        }

        MoveOutcome {
            changed: true,
            score_delta,
            new_tile,
        }
    }

    /// Terminal iff the board is full and no two orthogonal neighbors are
    /// equal. Full O(n^2) scan every call; idempotent in any phase.
    pub fn check_game_over(&self) -> bool {
        self.board.is_full() && !self.board.has_mergeable_pair()
    }

    /// Apply an action from the input boundary. Returns whether it changed
    /// anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Slide(dir) => self.slide(dir).changed,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fill a snapshot for the render sink, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.score = self.scores.score();
        out.best_score = self.scores.best();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.board.size());
        self.snapshot_into(&mut s);
        s
    }
}
