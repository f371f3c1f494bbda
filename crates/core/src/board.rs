//! Board module - manages the tile grid
//!
//! The board is a `rows x columns` grid where each cell holds a [`TileKind`].
//! Uses a flat vector in row-major order so every pass (detect, clear, compact,
//! refill) works on one buffer.
//! Coordinates: (row, column), row 0 at the top. Gravity pulls towards the
//! bottom row.

use crate::error::ConstructionError;
use crate::matches::{has_run, MatchMask};
use crate::types::{Coord, TileKind, MIN_DIMENSION};

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<TileKind>,
}

pub(crate) fn check_dimensions(rows: usize, columns: usize) -> Result<(), ConstructionError> {
    if rows < MIN_DIMENSION {
        return Err(ConstructionError::TooFewRows {
            rows,
            min: MIN_DIMENSION,
        });
    }
    if columns < MIN_DIMENSION {
        return Err(ConstructionError::TooFewColumns {
            columns,
            min: MIN_DIMENSION,
        });
    }
    Ok(())
}

impl Board {
    /// Create a board with every cell set to `kind`
    pub fn filled(rows: usize, columns: usize, kind: TileKind) -> Result<Self, ConstructionError> {
        check_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![kind; rows * columns],
        })
    }

    /// Create a board with every cell empty
    pub fn empty(rows: usize, columns: usize) -> Result<Self, ConstructionError> {
        Self::filled(rows, columns, TileKind::Empty)
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Rejects boards smaller than 3x3 and ragged input. No run check is made,
    /// so callers can stage positions that are about to match.
    pub fn from_rows(rows_2d: Vec<Vec<TileKind>>) -> Result<Self, ConstructionError> {
        let rows = rows_2d.len();
        let columns = rows_2d.first().map_or(0, Vec::len);
        check_dimensions(rows, columns)?;

        let mut cells = Vec::with_capacity(rows * columns);
        for (row, line) in rows_2d.into_iter().enumerate() {
            if line.len() != columns {
                return Err(ConstructionError::RaggedRows {
                    row,
                    len: line.len(),
                    columns,
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Calculate flat index, `None` if out of bounds
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.rows || coord.column >= self.columns {
            return None;
        }
        Some(coord.row * self.columns + coord.column)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Get cell at `coord`
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<TileKind> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at `coord`
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, kind: TileKind) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Exchange two cells. Returns false (and changes nothing) if either is out of bounds.
    pub fn swap(&mut self, a: Coord, b: Coord) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[TileKind]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// One column, top to bottom
    pub fn column(&self, column: usize) -> Option<Vec<TileKind>> {
        if column >= self.columns {
            return None;
        }
        Some(
            (0..self.rows)
                .map(|row| self.cells[row * self.columns + column])
                .collect(),
        )
    }

    /// Set every marked cell to `Empty`. Returns how many tiles were removed.
    pub fn clear_mask(&mut self, mask: &MatchMask) -> usize {
        let mut cleared = 0;
        for coord in mask.iter() {
            if let Some(idx) = self.index(coord) {
                if !self.cells[idx].is_empty() {
                    self.cells[idx] = TileKind::Empty;
                    cleared += 1;
                }
            }
        }
        cleared
    }

    /// Let tiles fall: in every column, non-empty tiles move down over empty
    /// cells keeping their order, and the gaps collect at the top.
    ///
    /// Uses a bottom-up two-pointer pass per column (no allocation).
    /// Returns the number of tiles that moved.
    pub fn compact(&mut self) -> usize {
        let mut moved = 0;
        for column in 0..self.columns {
            let mut write_row = self.rows;
            for read_row in (0..self.rows).rev() {
                let read_idx = read_row * self.columns + column;
                if self.cells[read_idx].is_empty() {
                    continue;
                }
                write_row -= 1;
                if write_row != read_row {
                    let write_idx = write_row * self.columns + column;
                    self.cells[write_idx] = self.cells[read_idx];
                    self.cells[read_idx] = TileKind::Empty;
                    moved += 1;
                }
            }
        }
        moved
    }

    /// Coordinates of empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_empty())
            .map(move |(idx, _)| Coord::new(idx / columns, idx % columns))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|kind| kind.is_empty()).count()
    }

    /// No empty cells and no run of three or more.
    pub fn is_settled(&self) -> bool {
        self.count_empty() == 0 && !has_run(self)
    }

    /// Convert to rows of cells (top row first)
    pub fn to_rows(&self) -> Vec<Vec<TileKind>> {
        self.cells
            .chunks(self.columns)
            .map(<[TileKind]>::to_vec)
            .collect()
    }
}
