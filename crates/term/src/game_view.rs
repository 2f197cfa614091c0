//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! The board is drawn top-down with north up and east to the right, so at the
//! default camera facing the arrow keys move the `@` the way they point.
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | `·` | flat ground |
//! | `░` | lethal floor |
//! | `▲` / `▼` | raised tile above / below rest, shaded by height |
//! | `●` | obstacle |
//! | `◎` | goal |
//! | `@` | player (`x` while falling) |
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, Hazard, GRID_SIZE, LEVEL_COUNT, TILE_OFFSET_LIMIT};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(28, 30, 38);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const RAISED_LOW: Rgb = Rgb::new(40, 60, 110);
const RAISED_HIGH: Rgb = Rgb::new(150, 200, 255);

/// Top-down terminal rendition of a run.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Terminal cell of the top-left corner of grid cell `pos`, relative to the board origin
    pub fn cell_origin(&self, pos: GridPos) -> Option<(u16, u16)> {
        if !pos.in_bounds() {
            return None;
        }
        let col = pos.i as u16;
        let row = (GRID_SIZE as u16 - 1) - pos.j as u16;
        Some((1 + col * self.cell_w, 1 + row * self.cell_h))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for i in 0..GRID_SIZE as i8 {
            for j in 0..GRID_SIZE as i8 {
                let pos = GridPos::new(i, j);
                if let Some(cell) = snap.cell(pos) {
                    let (ch, style) = cell_glyph(cell, pos == GridPos::GOAL);
                    self.fill_cell(fb, start_x, start_y, pos, ch, style);
                }
            }
        }

        if let Some((cx, cy)) = self.cell_origin(snap.player_cell) {
            let ch = if snap.dying { 'x' } else { '@' };
            let bg = snap
                .cell(snap.player_cell)
                .map(|c| cell_glyph(c, snap.player_cell == GridPos::GOAL).1.bg)
                .unwrap_or(BOARD_BG);
            let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
            fb.put_char(
                start_x + cx + self.cell_w / 2,
                start_y + cy + self.cell_h / 2,
                ch,
                style,
            );
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.won {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WON");
        } else if snap.lost {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.put_char(x, y, '╔', style);
        fb.put_char(x + w - 1, y, '╗', style);
        fb.put_char(x, y + h - 1, '╚', style);
        fb.put_char(x + w - 1, y + h - 1, '╝', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', style);
            fb.put_char(x + dx, y + h - 1, '═', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', style);
            fb.put_char(x + w - 1, y + dy, '║', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: GridPos,
        ch: char,
        style: CellStyle,
    ) {
        let Some((cx, cy)) = self.cell_origin(pos) else {
            return;
        };
        let (x, y) = (start_x + cx, start_y + cy);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(x + self.cell_w / 2, y + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        start_y: u16,
    ) {
        if x.saturating_add(PANEL_WIDTH) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(230, 230, 230), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(190, 190, 190), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(x, y, "TILEHOP", label);
        y += 2;

        let end = fb.put_str(x, y, "LEVEL  ", label);
        let end = fb.put_u32(end, y, snap.level, value);
        let end = fb.put_str(end, y, "/", dim);
        fb.put_u32(end, y, LEVEL_COUNT, dim);
        y += 1;

        let end = fb.put_str(x, y, "LIVES  ", label);
        fb.put_u32(end, y, snap.lives_remaining, value);
        y += 1;

        let end = fb.put_str(x, y, "SCORE  ", label);
        fb.put_u32(end, y, snap.score, value);
        y += 1;

        let end = fb.put_str(x, y, "SPEED  ", label);
        fb.put_u32(end, y, snap.speed as u32, value);
        y += 2;

        let end = fb.put_str(x, y, "CAMERA ", label);
        let end = fb.put_str(end, y, snap.camera.as_str(), value);
        let end = fb.put_str(end + 1, y, "@", dim);
        fb.put_u32(end, y, snap.facing.degrees() as u32, dim);
        y += 1;

        y = put_vec(fb, x, y, "EYE    ", snap.eye, label, value);
        y = put_vec(fb, x, y, "TARGET ", snap.target, label, value);
        y += 1;

        let end = fb.put_str(x, y, "TILES  ", label);
        fb.put_f32(end, y, snap.tile_offset as f32, 0, value);
        y += 1;

        let end = fb.put_str(x, y, "MOVE   ", label);
        let mut end = fb.put_str(end, y, snap.motion.as_str(), value);
        if let Some(phase) = snap.jump_phase {
            end = fb.put_str(end + 1, y, phase.as_str(), dim);
        }
        if snap.jump_armed {
            fb.put_str(end + 1, y, "[jump]", label);
        }
        y += 2;

        for hint in [
            "arrows move  space jump",
            "u t a b camera  f s speed",
            "n restart  q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, hint, dim);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(90, 20, 30)).bold();
        let mid_y = start_y + frame_h / 2;
        let w = text.chars().count() as u16 + 4;
        let x = start_x + frame_w.saturating_sub(w) / 2;
        fb.fill_rect(x, mid_y.saturating_sub(1), w, 3, ' ', style);
        fb.put_str(x + 2, mid_y, text, style);

        let hint = "n: new run";
        let hx = start_x + frame_w.saturating_sub(hint.len() as u16) / 2;
        fb.put_str(hx, mid_y + 2, hint, CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG));
    }
}

/// Columns the side panel needs next to the board
const PANEL_WIDTH: u16 = 28;

fn put_vec(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    name: &str,
    v: crate::core::Vec3,
    label: CellStyle,
    value: CellStyle,
) -> u16 {
    let mut end = fb.put_str(x, y, name, label);
    for c in v.to_array() {
        end = fb.put_f32(end, y, c, 0, value) + 1;
    }
    y + 1
}

fn cell_glyph(cell: CellSnapshot, goal: bool) -> (char, CellStyle) {
    if cell.obstacle {
        return ('●', CellStyle::new(Rgb::new(250, 210, 60), BOARD_BG).bold());
    }
    match cell.hazard {
        Hazard::Safe if goal => ('◎', CellStyle::new(Rgb::new(90, 230, 120), BOARD_BG).bold()),
        Hazard::Safe => ('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()),
        Hazard::Lethal => ('░', CellStyle::new(Rgb::new(200, 60, 60), Rgb::new(60, 10, 10))),
        Hazard::Raised => {
            let span = 2 * TILE_OFFSET_LIMIT;
            let t = ((cell.height + TILE_OFFSET_LIMIT).clamp(0, span) * 255 / span) as u8;
            let bg = RAISED_LOW.mix(RAISED_HIGH, t);
            let ch = if cell.height >= 0 { '▲' } else { '▼' };
            (ch, CellStyle::new(Rgb::new(15, 15, 25), bg).bold())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_origin_puts_north_up_and_east_right() {
        let view = GameView::default();
        assert_eq!(view.cell_origin(GridPos::new(0, 9)), Some((1, 1)));
        assert_eq!(view.cell_origin(GridPos::new(0, 0)), Some((1, 10)));
        assert_eq!(view.cell_origin(GridPos::new(9, 0)), Some((28, 10)));
        assert_eq!(view.cell_origin(GridPos::new(10, 0)), None);
    }

    #[test]
    fn test_raised_tiles_shade_with_height() {
        let low = CellSnapshot {
            hazard: Hazard::Raised,
            obstacle: false,
            height: -50,
        };
        let high = CellSnapshot { height: 50, ..low };
        let (low_ch, low_style) = cell_glyph(low, false);
        let (high_ch, high_style) = cell_glyph(high, false);
        assert_eq!(low_ch, '▼');
        assert_eq!(high_ch, '▲');
        assert_eq!(low_style.bg, RAISED_LOW);
        assert_eq!(high_style.bg, RAISED_HIGH);
    }

    #[test]
    fn test_obstacle_wins_over_goal_marker() {
        let cell = CellSnapshot {
            hazard: Hazard::Safe,
            obstacle: true,
            height: 0,
        };
        assert_eq!(cell_glyph(cell, true).0, '●');
        assert_eq!(cell_glyph(CellSnapshot::default(), true).0, '◎');
    }
}
