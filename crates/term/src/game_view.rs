//! GameView: maps a game scene into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Session, Tetromino};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::status::StatusPanel;
use crate::types::Status;

/// Play-area background by level, cycling
pub const LEVEL_BACKGROUNDS: [Rgb; 4] = [
    Rgb::new(25, 25, 25),
    Rgb::new(25, 45, 25),
    Rgb::new(25, 25, 45),
    Rgb::new(45, 25, 25),
];

const LOCKED_FG: Rgb = Rgb::new(255, 255, 255);
const ACTIVE_FG: Rgb = Rgb::new(0, 255, 0);
const GRID_FG: Rgb = Rgb::new(50, 50, 50);

/// Background for a level (levels start at 1)
pub fn level_background(level: u32) -> Rgb {
    LEVEL_BACKGROUNDS[(level.saturating_sub(1) as usize) % LEVEL_BACKGROUNDS.len()]
}

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

/// Everything one frame shows
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub board: &'a Board,
    pub active: &'a Tetromino,
    pub status: Status,
    pub game_over: bool,
}

impl<'a> Scene<'a> {
    pub fn new(board: &'a Board, active: &'a Tetromino, status: Status, game_over: bool) -> Self {
        Self {
            board,
            active,
            status,
            game_over,
        }
    }

    /// Scene of a session, with figures taken from its status panel
    pub fn from_session(session: &'a Session<StatusPanel>) -> Self {
        Self::new(
            session.board(),
            session.active(),
            session.status_sink().latest(),
            session.is_game_over(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let board = scene.board;
        let board_px_w = board.width() as u16 * self.cell_w;
        let board_px_h = board.height() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = level_background(scene.status.level);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::default());

        // Locked cells first, empty cells as grid dots.
        let grid = CellStyle::new(GRID_FG, bg);
        let locked = CellStyle::new(LOCKED_FG, bg).bold();
        for y in 0..board.height() {
            for x in 0..board.width() {
                let (ch, style) = if board.is_occupied(x as i8, y as i8) {
                    ('█', locked)
                } else {
                    ('·', grid)
                };
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        // Active piece, clipped to the board.
        let active = CellStyle::new(ACTIVE_FG, bg).bold();
        for p in scene.active.cells() {
            if board.contains(p.x, p.y) {
                self.fill_cell_rect(fb, start_x, start_y, p.x as u16, p.y as u16, '█', active);
            }
        }

        self.draw_side_panel(fb, scene.status, viewport, start_x, start_y, frame_w);

        if scene.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: Status,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, figure) in [
            ("SCORE", status.score),
            ("LINES", status.lines),
            ("LEVEL", status.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), figure, value);
            y = y.saturating_add(3);
        }

        let help = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0));
        for line in ["↑   rotate", "←→  move", "↓   drop", "esc quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
