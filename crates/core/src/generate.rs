//! Initial board generation without pre-existing runs.
//!
//! Cells are filled in row-major order. Each cell tries the palette in a fresh
//! random order and takes the first kind that does not complete a run of three
//! with its two left neighbours or its two upper neighbours. Only those four
//! cells are filled at that point, so at most two kinds are ever blocked and a
//! palette of three or more always has a candidate.

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::error::{ConstructionError, Inconsistency};
use crate::rng::TilePalette;
use crate::types::{Coord, TileKind};

/// Reshuffles tried for one cell before giving up.
const MAX_RESHUFFLES: usize = 8;

/// Errors from [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Inconsistency(#[from] Inconsistency),
}

/// Generate a `rows x columns` board with no run of three.
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    palette: &TilePalette,
    rng: &mut R,
) -> Result<Board, GenerateError> {
    let mut board = Board::empty(rows, columns)?;
    fill_without_runs(&mut board, palette, rng)?;
    info!(
        "generated {}x{} board with {} tile kinds",
        rows,
        columns,
        palette.len()
    );
    Ok(board)
}

/// Fill every cell of `board` in row-major order, avoiding runs.
///
/// Existing contents are overwritten.
pub fn fill_without_runs<R: Rng + ?Sized>(
    board: &mut Board,
    palette: &TilePalette,
    rng: &mut R,
) -> Result<(), Inconsistency> {
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let coord = Coord::new(row, column);
            let kind = pick_kind(board, coord, palette, rng)
                .ok_or(Inconsistency::GenerationExhausted { coord })?;
            board.set(coord, kind);
        }
    }
    Ok(())
}

fn pick_kind<R: Rng + ?Sized>(
    board: &Board,
    coord: Coord,
    palette: &TilePalette,
    rng: &mut R,
) -> Option<TileKind> {
    for _ in 0..MAX_RESHUFFLES {
        let order = palette.shuffled(rng);
        if let Some(kind) = order
            .iter()
            .copied()
            .find(|&kind| !completes_run(board, coord, kind))
        {
            return Some(kind);
        }
    }
    None
}

/// Whether placing `kind` at `coord` would end a run of three with the two
/// cells to the left or the two cells above.
pub fn completes_run(board: &Board, coord: Coord, kind: TileKind) -> bool {
    let Coord { row, column } = coord;
    let same = |r: usize, c: usize| board.get(Coord::new(r, c)) == Some(kind);

    if column >= 2 && same(row, column - 1) && same(row, column - 2) {
        return true;
    }
    if row >= 2 && same(row - 1, column) && same(row - 2, column) {
        return true;
    }
    false
}
