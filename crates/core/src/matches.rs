//! Run detection.
//!
//! A run is a maximal line of at least [`MIN_RUN_LEN`] equal, non-empty tiles in
//! one row or one column. Detection only reads the board; clearing goes through
//! a [`MatchMask`] built from the complete run list, so a cell shared by a
//! horizontal and a vertical run is honoured by both.

use crate::board::Board;
use crate::types::{Coord, TileKind, MIN_RUN_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A maximal run of equal tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub orientation: Orientation,
    /// Leftmost (horizontal) or topmost (vertical) cell
    pub start: Coord,
    pub len: usize,
    pub kind: TileKind,
}

impl Run {
    /// Cells covered by the run, from `start` onwards.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Run {
            orientation, start, ..
        } = *self;
        (0..self.len).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(start.row, start.column + i),
            Orientation::Vertical => Coord::new(start.row + i, start.column),
        })
    }

    pub fn contains(&self, coord: Coord) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                coord.row == self.start.row
                    && coord.column >= self.start.column
                    && coord.column < self.start.column + self.len
            }
            Orientation::Vertical => {
                coord.column == self.start.column
                    && coord.row >= self.start.row
                    && coord.row < self.start.row + self.len
            }
        }
    }
}

/// Every run on the board: rows top to bottom, then columns left to right.
pub fn find_runs(board: &Board) -> Vec<Run> {
    let mut runs = Vec::new();
    for row in 0..board.rows() {
        scan_line(
            board,
            board.columns(),
            |i| Coord::new(row, i),
            Orientation::Horizontal,
            &mut runs,
        );
    }
    for column in 0..board.columns() {
        scan_line(
            board,
            board.rows(),
            |i| Coord::new(i, column),
            Orientation::Vertical,
            &mut runs,
        );
    }
    runs
}

fn scan_line(
    board: &Board,
    len: usize,
    at: impl Fn(usize) -> Coord,
    orientation: Orientation,
    out: &mut Vec<Run>,
) {
    let kind_at = |i: usize| board.get(at(i)).unwrap_or(TileKind::Empty);

    let mut start = 0;
    while start < len {
        let kind = kind_at(start);
        let mut end = start + 1;
        while end < len && kind_at(end) == kind {
            end += 1;
        }
        if !kind.is_empty() && end - start >= MIN_RUN_LEN {
            out.push(Run {
                orientation,
                start: at(start),
                len: end - start,
                kind,
            });
        }
        start = end;
    }
}

/// Whether any row or column holds three equal non-empty tiles in a line.
///
/// Short-circuits on the first hit; no allocation.
pub fn has_run(board: &Board) -> bool {
    let same = |a: Coord, b: Coord, c: Coord| match (board.get(a), board.get(b), board.get(c)) {
        (Some(x), Some(y), Some(z)) => !x.is_empty() && x == y && y == z,
        _ => false,
    };

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let here = Coord::new(row, column);
            if column + 2 < board.columns()
                && same(here, Coord::new(row, column + 1), Coord::new(row, column + 2))
            {
                return true;
            }
            if row + 2 < board.rows()
                && same(here, Coord::new(row + 1, column), Coord::new(row + 2, column))
            {
                return true;
            }
        }
    }
    false
}

/// Cells to clear in one pass, computed before any cell is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMask {
    rows: usize,
    columns: usize,
    marked: Vec<bool>,
    count: usize,
}

impl MatchMask {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            marked: vec![false; rows * columns],
            count: 0,
        }
    }

    /// Mask covering every cell of `runs`; shared cells are marked once.
    pub fn from_runs(board: &Board, runs: &[Run]) -> Self {
        let mut mask = Self::new(board.rows(), board.columns());
        for run in runs {
            for coord in run.cells() {
                mask.mark(coord);
            }
        }
        mask
    }

    pub fn mark(&mut self, coord: Coord) {
        if coord.row >= self.rows || coord.column >= self.columns {
            return;
        }
        let idx = coord.row * self.columns + coord.column;
        if !self.marked[idx] {
            self.marked[idx] = true;
            self.count += 1;
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows
            && coord.column < self.columns
            && self.marked[coord.row * self.columns + coord.column]
    }

    /// Number of distinct marked cells
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Marked cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let columns = self.columns;
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(idx, _)| Coord::new(idx / columns, idx % columns))
    }
}
