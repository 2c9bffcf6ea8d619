//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::get_shape;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Rows reserved per shape in the NEXT panel (tallest shape plus a gap).
const PREVIEW_SLOT_H: u16 = 5;

/// Minimum side panel width; narrower terminals get the playfield only.
const MIN_PANEL_W: u16 = 12;

/// Board frame origin and size in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the falling-block game.
#[derive(Debug, Clone)]
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
        Self::new(2, 1)
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

    /// Terminal size of the bordered playfield.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG),
        );
        fb.draw_box(
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for (x, y, kind) in snap.locked_cells() {
            self.draw_board_cell(fb, frame, x as u16, y as u16, kind);
        }

        // Blocks above the visible top are not drawn.
        if let Some(active) = snap.active {
            for &(x, y) in active.cells.iter() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_board_cell(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, snap, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(Rgb::of_piece(kind), PLAYFIELD_BG).bold();
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(2);
        for kind in snap.next_queue.iter().flatten() {
            self.draw_preview_shape(fb, panel_x, y, *kind);
            y = y.saturating_add(PREVIEW_SLOT_H);
        }

        for (name, v) in [("Score", snap.score), ("Level", snap.level), ("Lines", snap.lines)] {
            let end = fb.put_str(panel_x, y, name, label);
            fb.put_str(end, y, ": ", label);
            fb.put_u32(end + 2, y, v, value);
            y = y.saturating_add(1);
        }
    }

    /// Draw a shape with its top-left bounding corner at `(x, y)`.
    fn draw_preview_shape(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = get_shape(kind);
        let min_dx = shape.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        let min_dy = shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);

        let style = CellStyle::new(Rgb::of_piece(kind), PANEL_BG).bold();
        for &(dx, dy) in shape.iter() {
            let cx = x + ((dx - min_dx) as u16) * 2;
            let cy = y + (dy - min_dy) as u16;
            fb.fill_rect(cx, cy, 2, 1, '█', style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let text = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let info = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        // Box spanning the playfield width, 6 rows tall, centered vertically.
        let box_h = 6;
        let box_y = frame.y.saturating_add(frame.h.saturating_sub(box_h) / 2);
        fb.fill_rect(frame.x + 1, box_y, frame.w - 2, box_h, ' ', info);

        let centered = |s_len: u16| frame.x.saturating_add(frame.w.saturating_sub(s_len) / 2);

        let title = "GAME OVER";
        fb.put_str(centered(title.len() as u16), box_y + 1, title, text);

        for (row, (name, v)) in [("Score: ", snap.score), ("Level: ", snap.level)]
            .into_iter()
            .enumerate()
        {
            let width = name.len() as u16 + digit_count(v);
            let y = box_y + 2 + row as u16;
            let end = fb.put_str(centered(width), y, name, info);
            fb.put_u32(end, y, v, info);
        }

        let hint = "Press R to Restart";
        fb.put_str(centered(hint.len() as u16), box_y + 4, hint, text);
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
