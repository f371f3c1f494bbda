//! Pointer position to board cell.
//!
//! Terminal mouse events report a column/row in character cells. The board is
//! drawn at some origin with a fixed cell size, so the cell under the pointer is
//! an integer division after subtracting the origin. Positions outside the
//! board map to `None` and never reach the engine.

use crate::types::Coord;

/// Board placement on screen, in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMap {
    /// Screen position of the board's top-left cell
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub rows: usize,
    pub columns: usize,
}

impl PointerMap {
    /// Cell under the pointer at screen position (`x`, `y`).
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Coord> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;

        let column = (dx / self.cell_w) as usize;
        let row = (dy / self.cell_h) as usize;
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(Coord::new(row, column))
    }
}
