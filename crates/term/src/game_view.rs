//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Cells are drawn by value: settled colors, the white flash marker on
//! clearing rows, and the bomb face on a falling bomb all come from the
//! same lookup, so the view never needs to know which piece produced a
//! cell.

use crate::core::{GameSession, ShapeMatrix};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, ARENA_HEIGHT, ARENA_WIDTH, BOMB_CELL, FLASH_CELL};

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_popup(session, None, viewport, fb);
    }

    /// Render with an optional stage popup box over the arena.
    pub fn render_into_with_popup(
        &self,
        session: &GameSession,
        popup_stage: Option<u32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::default()));

        let arena_px_w = (ARENA_WIDTH as u16) * self.cell_w;
        let arena_px_h = (ARENA_HEIGHT as u16) * self.cell_h;
        let frame_w = arena_px_w + 2;
        let frame_h = arena_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the play area.
        fb.fill_rect(start_x + 1, start_y + 1, arena_px_w, arena_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells, including any row currently flashing.
        for y in 0..ARENA_HEIGHT as u16 {
            for x in 0..ARENA_WIDTH as u16 {
                let value = session.arena().get(x as i32, y as i32).unwrap_or(0);
                if cell_face(value).is_some() {
                    self.draw_cell_value(fb, start_x, start_y, x, y, value);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        // The falling piece.
        if let Some(active) = session.active() {
            for (dx, dy, value) in active.matrix().cells() {
                if cell_face(value).is_none() {
                    continue;
                }
                let x = active.x() + dx;
                let y = active.y() + dy;
                if x >= 0 && x < ARENA_WIDTH as i32 && y >= 0 && y < ARENA_HEIGHT as i32 {
                    self.draw_cell_value(fb, start_x, start_y, x as u16, y as u16, value);
                }
            }
        }

        // Side panel (score/stage/best/next).
        self.draw_side_panel(fb, session, viewport, start_x, start_y, frame_w);

        // Stage popup sits over the arena, overlays over everything.
        if let Some(stage) = popup_stage {
            self.draw_stage_popup(fb, start_x, start_y, frame_w, frame_h, stage);
        }
        match session.phase() {
            GamePhase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
            }
            GamePhase::GameOver => {
                self.draw_overlay_text(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &["GAME OVER", "R TO RESTART"],
                );
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Allocating variant of [`GameView::render_into_with_popup`].
    pub fn render_with_popup(
        &self,
        session: &GameSession,
        popup_stage: Option<u32>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_popup(session, popup_stage, viewport, &mut fb);
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_cell_value(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: u8,
    ) {
        let Some((fg, ch, bold)) = cell_face(value) else {
            return;
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
    }

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
        session: &GameSession,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STAGE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.stage(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.high_score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_next_preview(fb, session.next_matrix(), panel_x, y);
    }

    fn draw_next_preview(&self, fb: &mut FrameBuffer, matrix: &ShapeMatrix, x: u16, y: u16) {
        for (dx, dy, value) in matrix.cells() {
            let Some((fg, ch, bold)) = cell_face(value) else {
                continue;
            };
            let style = CellStyle {
                fg,
                bg: Rgb::new(30, 30, 40),
                bold,
                dim: false,
            };
            let px = x.saturating_add(dx as u16 * self.cell_w);
            let py = y.saturating_add(dy as u16 * self.cell_h);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_stage_popup(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        stage: u32,
    ) {
        // "STAGE " plus digits, one pad cell each side, one border cell.
        let text_w = 6 + decimal_width(stage);
        let box_w = text_w + 4;
        let box_h = 3;
        let x = start_x.saturating_add(frame_w.saturating_sub(box_w) / 2);
        let y = start_y.saturating_add(frame_h / 2).saturating_sub(2);

        let style = CellStyle {
            fg: Rgb::new(240, 220, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        self.draw_border(fb, x, y, box_w, box_h, style);
        fb.put_str(x + 2, y + 1, "STAGE ", style);
        fb.put_u32(x + 8, y + 1, stage, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let base_y = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, base_y.saturating_add(i as u16), text, style);
        }
    }
}

/// Foreground, glyph, and bold flag for a cell value.
///
/// Returns `None` for empty cells and anything unknown.
fn cell_face(value: u8) -> Option<(Rgb, char, bool)> {
    match value {
        1 => Some((Rgb::new(200, 120, 220), '█', false)),
        2 => Some((Rgb::new(240, 220, 80), '█', false)),
        3 => Some((Rgb::new(255, 165, 0), '█', false)),
        4 => Some((Rgb::new(80, 120, 220), '█', false)),
        5 => Some((Rgb::new(80, 220, 220), '█', false)),
        6 => Some((Rgb::new(100, 220, 120), '█', false)),
        7 => Some((Rgb::new(220, 80, 80), '█', false)),
        8 => Some((Rgb::new(230, 130, 180), '█', false)),
        FLASH_CELL => Some((Rgb::new(255, 255, 255), '█', true)),
        BOMB_CELL => Some((Rgb::new(255, 90, 30), '▓', true)),
        _ => None,
    }
}

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}
