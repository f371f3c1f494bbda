use crate::board::Board;
use crate::matches::has_run;
use crate::types::{Coord, TileKind};

/// Read-only copy of a board, handed to the renderer and returned in cascade steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major cells
    pub cells: Vec<TileKind>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            columns: board.columns(),
            cells: board.cells().to_vec(),
        }
    }
}

impl BoardSnapshot {
    pub fn get(&self, coord: Coord) -> Option<TileKind> {
        if coord.row >= self.rows || coord.column >= self.columns {
            return None;
        }
        Some(self.cells[coord.row * self.columns + coord.column])
    }

    pub fn row(&self, row: usize) -> Option<&[TileKind]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|k| k.is_empty()).count()
    }

    /// Whether the snapshot still contains a run of three.
    pub fn has_run(&self) -> bool {
        match self.to_board() {
            Some(board) => has_run(&board),
            None => false,
        }
    }

    /// No empty cells and no runs.
    pub fn is_settled(&self) -> bool {
        self.count_empty() == 0 && !self.has_run()
    }

    pub fn to_rows(&self) -> Vec<Vec<TileKind>> {
        self.cells
            .chunks(self.columns.max(1))
            .map(<[TileKind]>::to_vec)
            .collect()
    }

    /// Rebuild a board from the snapshot. `None` for degenerate dimensions.
    pub fn to_board(&self) -> Option<Board> {
        Board::from_rows(self.to_rows()).ok()
    }

    /// Stable 64-bit FNV-1a hash of the dimensions and cells.
    ///
    /// `DefaultHasher` output is not guaranteed stable across Rust versions, so
    /// the frame loop uses this to detect board changes.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut h = OFFSET_BASIS;
        let dims = [self.rows as u64, self.columns as u64];
        let bytes = dims
            .iter()
            .flat_map(|d| d.to_le_bytes())
            .chain(self.cells.iter().map(|k| k.as_u8()));
        for b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        }
        h
    }
}
