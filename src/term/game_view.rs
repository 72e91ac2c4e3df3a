//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns reserved to the right of the board for scores and key hints.
const SIDE_PANEL_W: u16 = 20;

/// A lightweight terminal view for the board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells leave room for four-digit tiles and compensate for the
        // terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let n = snap.size as u16;
        let board_px_w = n * self.cell_w;
        let board_px_h = n * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(187, 173, 160), Rgb::new(0, 0, 0));
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles.
        for y in 0..n {
            for x in 0..n {
                let value = snap.get(x as usize, y as usize).unwrap_or(0);
                let style = tile_style(value);
                let px = start_x + 1 + x * self.cell_w;
                let py = start_y + 1 + y * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

                if value > 0 {
                    let label = value.to_string();
                    let lx = px + self.cell_w.saturating_sub(label.len() as u16) / 2;
                    let ly = py + self.cell_h / 2;
                    fb.put_str(lx, ly, &label, style.bold());
                }
            }
        }

        self.draw_side_panel(&mut fb, snap, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let title = CellStyle::default().bold();
        let text = CellStyle::default();
        let dim = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));

        fb.put_str(x, y, "2048", title);
        fb.put_str(x, y + 2, &format!("Score: {}", snap.score), text);
        fb.put_str(x, y + 3, &format!("Best:  {}", snap.best_score), text);
        fb.put_str(x, y + 5, "arrows/hjkl  slide", dim);
        fb.put_str(x, y + 6, "r  restart", dim);
        fb.put_str(x, y + 7, "q  quit", dim);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 58, 50)).bold();
        let mid = y + h / 2;

        for (dy, line) in ["GAME OVER", "press r to restart"].iter().enumerate() {
            let row = mid.saturating_sub(1) + dy as u16;
            fb.fill_rect(x + 1, row, w.saturating_sub(2), 1, ' ', style);
            let lx = x + 1 + (w.saturating_sub(2)).saturating_sub(line.len() as u16) / 2;
            fb.put_str(lx, row, line, style);
        }
    }
}

/// Tile colors by value, matching the classic palette: light tiles up to 4
/// with dark text, warm tiles through 2048, a neutral fallback elsewhere.
fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(204, 192, 179),
    };
    let fg = if value == 2 || value == 4 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    };
    CellStyle::new(fg, bg)
}
