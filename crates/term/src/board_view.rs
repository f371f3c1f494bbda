//! BoardView: maps a board snapshot and HUD state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, SwapRequest, TileKind};

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

/// Where the board lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Screen position of cell (0, 0).
    pub fn cells_origin(&self) -> (u16, u16) {
        (self.frame_x.saturating_add(1), self.frame_y.saturating_add(1))
    }

    /// Screen position of `coord`'s top-left character, `None` past `u16` range.
    pub fn cell_position(&self, coord: Coord) -> Option<(u16, u16)> {
        let (ox, oy) = self.cells_origin();
        let px = u16::try_from(coord.column)
            .ok()?
            .checked_mul(self.cell_w)?
            .checked_add(ox)?;
        let py = u16::try_from(coord.row)
            .ok()?
            .checked_mul(self.cell_h)?
            .checked_add(oy)?;
        Some((px, py))
    }
}

/// Everything drawn besides the tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub cursor: Option<Coord>,
    pub selected: Option<Coord>,
    pub hint: Option<SwapRequest>,
    pub seed: Option<u64>,
    pub kinds: usize,
    pub swaps: u64,
    /// Cascade phase being shown, e.g. "CLEAR"
    pub phase: Option<&'static str>,
    pub message: String,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(80, 80, 110);
const SELECTED_BG: Rgb = Rgb::new(140, 110, 40);
const HINT_BG: Rgb = Rgb::new(40, 100, 60);

/// A lightweight terminal renderer for the match-3 board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 3x1 keeps the glyph centred and roughly square in most terminal fonts.
        Self { cell_w: 3, cell_h: 1 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Centre a `rows x columns` board (plus border) in the viewport.
    pub fn layout(&self, rows: usize, columns: usize, viewport: Viewport) -> BoardLayout {
        let frame_w = saturating_u16(columns)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = saturating_u16(rows)
            .saturating_mul(self.cell_h)
            .saturating_add(2);
        BoardLayout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap.rows, snap.columns, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, &layout, border);

        // Cells are at least one character each, so later ones are off screen.
        let rows = snap.rows.min(usize::from(viewport.height));
        let columns = snap.columns.min(usize::from(viewport.width));

        let hint_cells = hud.hint.map(|h| [h.origin, h.target]);
        for row in 0..rows {
            for column in 0..columns {
                let coord = Coord::new(row, column);
                let kind = snap.get(coord).unwrap_or_default();

                let bg = if hud.selected == Some(coord) {
                    SELECTED_BG
                } else if hud.cursor == Some(coord) {
                    CURSOR_BG
                } else if hint_cells.is_some_and(|cells| cells.contains(&coord)) {
                    HINT_BG
                } else {
                    BOARD_BG
                };
                self.draw_tile(fb, &layout, coord, kind, bg);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        coord: Coord,
        kind: TileKind,
        bg: Rgb,
    ) {
        let Some((px, py)) = layout.cell_position(coord) else {
            return;
        };

        let (glyph, style) = tile_glyph(kind);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style.on(bg));
        fb.put_char(
            px.saturating_add(self.cell_w / 2),
            py.saturating_add(self.cell_h / 2),
            glyph,
            style.on(bg),
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        hud: &Hud,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let accent = CellStyle::new(Rgb::new(240, 200, 80), Rgb::new(0, 0, 0)).bold();

        let y = layout.frame_y;
        let x = fb.put_str(panel_x, y, "SIZE ", label);
        let x = fb.put_u64(x, y, snap.rows as u64, value);
        let x = fb.put_str(x, y, "x", value);
        fb.put_u64(x, y, snap.columns as u64, value);

        let y = y.saturating_add(1);
        let x = fb.put_str(panel_x, y, "KINDS ", label);
        fb.put_u64(x, y, hud.kinds as u64, value);

        let y = y.saturating_add(1);
        let x = fb.put_str(panel_x, y, "SEED ", label);
        match hud.seed {
            Some(seed) => fb.put_u64(x, y, seed, value),
            None => fb.put_str(x, y, "-", value),
        };

        let y = y.saturating_add(1);
        let x = fb.put_str(panel_x, y, "SWAPS ", label);
        fb.put_u64(x, y, hud.swaps, value);

        let mut y = y.saturating_add(2);
        if let Some(phase) = hud.phase {
            fb.put_str(panel_x, y, phase, accent);
            y = y.saturating_add(1);
        }
        if !hud.message.is_empty() {
            fb.put_str(panel_x, y, &hud.message, value);
        }
    }
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
    let BoardLayout {
        frame_x: x,
        frame_y: y,
        frame_w: w,
        frame_h: h,
        ..
    } = *layout;
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

/// Glyph and colour per tile kind. Circle, square and triangle keep the
/// green/blue/red of the original pieces.
pub fn tile_glyph(kind: TileKind) -> (char, CellStyle) {
    let (ch, fg) = match kind {
        TileKind::Empty => ('·', Rgb::new(90, 90, 100)),
        TileKind::Circle => ('●', Rgb::new(80, 200, 100)),
        TileKind::Square => ('■', Rgb::new(80, 120, 230)),
        TileKind::Triangle => ('▲', Rgb::new(220, 80, 80)),
        TileKind::Diamond => ('◆', Rgb::new(240, 220, 80)),
        TileKind::Star => ('★', Rgb::new(200, 120, 220)),
        TileKind::Heart => ('♥', Rgb::new(80, 220, 220)),
    };
    let style = CellStyle::new(fg, BOARD_BG);
    if kind.is_empty() {
        (ch, style.dim())
    } else {
        (ch, style.bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centres_frame() {
        let view = BoardView::default();
        let layout = view.layout(5, 4, Viewport::new(40, 20));
        assert_eq!(layout.frame_w, 4 * 3 + 2);
        assert_eq!(layout.frame_h, 5 + 2);
        assert_eq!(layout.frame_x, (40 - 14) / 2);
        assert_eq!(layout.frame_y, (20 - 7) / 2);
        assert_eq!(layout.cells_origin(), (layout.frame_x + 1, layout.frame_y + 1));
    }

    #[test]
    fn layout_in_tiny_viewport_saturates() {
        let layout = BoardView::default().layout(8, 8, Viewport::new(4, 4));
        assert_eq!((layout.frame_x, layout.frame_y), (0, 0));
    }

    #[test]
    fn cell_position_stops_at_u16_range() {
        let layout = BoardView::default().layout(3, 40_000, Viewport::new(80, 24));
        assert_eq!(layout.frame_w, u16::MAX);
        assert_eq!(layout.cell_position(Coord::new(0, 0)), Some((1, 1 + layout.frame_y)));
        assert_eq!(layout.cell_position(Coord::new(0, 30_000)), None);
        assert_eq!(layout.cell_position(Coord::new(0, 70_000)), None);
    }

    #[test]
    fn every_kind_has_a_distinct_glyph() {
        let mut glyphs: Vec<char> = TileKind::PLAYABLE.iter().map(|k| tile_glyph(*k).0).collect();
        glyphs.push(tile_glyph(TileKind::Empty).0);
        let count = glyphs.len();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), count);
    }
}
