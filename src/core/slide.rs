//! Slide module - the line compress/merge pass
//!
//! A "line" is one row or column reoriented so that index 0 is the edge the
//! tiles slide toward. `compress_and_merge` runs the whole per-line move in
//! place; `line_cell` maps (line, offset) back to grid coordinates for each
//! direction so the engine can extract and write back lines uniformly.

use crate::types::{Direction, Position};

/// Result of one line pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineResult {
    /// Whether the line differs from its input at any position.
    pub changed: bool,
    /// Points accrued: the doubled value of every merge in this pass.
    pub score_delta: u32,
}

/// Compress and merge one line in place, sliding toward index 0.
///
/// Three steps: compact non-zero values toward the leading edge, merge
/// adjacent equal pairs in a single scan from the leading edge, compact
/// again to close the gaps the merges opened. A merged tile never merges
/// again in the same pass, and with three or more equal tiles the pair
/// nearest the leading edge merges first.
pub fn compress_and_merge(line: &mut [u32]) -> LineResult {
    let mut changed = false;

    // First compaction: zeros out, order preserved.
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] == 0 {
            continue;
        }
        if write != read {
            line[write] = line[read];
            line[read] = 0;
            changed = true;
        }
        write += 1;
    }
    let filled = write;

    // One merge scan over the packed prefix. A merge zeroes the trailing
    // cell, so the next comparison sees 0 and cannot re-merge the result.
    let mut score_delta = 0;
    for i in 0..filled.saturating_sub(1) {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            line[i + 1] = 0;
            score_delta += line[i];
            changed = true;
        }
    }

    // Second compaction closes merge gaps; the tail is already zero.
    let mut write = 0;
    for read in 0..filled {
        if line[read] == 0 {
            continue;
        }
        if write != read {
            line[write] = line[read];
            line[read] = 0;
        }
        write += 1;
    }

    LineResult {
        changed,
        score_delta,
    }
}

/// Grid coordinates of `offset` cells in from the leading edge of line
/// number `line`, for a slide in `dir` on a `size`-wide board.
///
/// Lines are rows for horizontal slides and columns for vertical ones;
/// offset 0 is the edge the tiles move toward.
pub fn line_cell(dir: Direction, line: usize, offset: usize, size: usize) -> Position {
    match dir {
        Direction::Left => Position::new(offset, line),
        Direction::Right => Position::new(size - 1 - offset, line),
        Direction::Up => Position::new(line, offset),
        Direction::Down => Position::new(line, size - 1 - offset),
    }
}
