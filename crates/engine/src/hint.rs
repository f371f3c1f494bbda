//! Swap suggestions.
//!
//! A hint is a legal swap after which one of the two moved tiles sits in a run.
//! Hints are advisory: the engine accepts swaps that clear nothing.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Coord, SwapRequest, MIN_RUN_LEN};

/// Every swap that would clear tiles, in row-major order of the first cell
/// (right neighbour before the one below).
pub fn find_matching_swaps(board: &Board) -> Vec<SwapRequest> {
    matching_swaps(board).collect()
}

/// First matching swap, if the board has one.
pub fn first_matching_swap(board: &Board) -> Option<SwapRequest> {
    matching_swaps(board).next()
}

/// Lazily tests every legal swap against a private copy of `board`.
fn matching_swaps(board: &Board) -> impl Iterator<Item = SwapRequest> + '_ {
    let mut scratch = board.clone();
    candidate_swaps(board)
        .filter(move |swap| swap_makes_run(&mut scratch, swap.origin, swap.target))
}

/// Every legal swap once, in row-major order of the first cell.
fn candidate_swaps(board: &Board) -> impl Iterator<Item = SwapRequest> + '_ {
    (0..board.rows())
        .flat_map(move |row| (0..board.columns()).map(move |column| Coord::new(row, column)))
        .flat_map(move |origin| {
            forward_neighbours(board, origin)
                .into_iter()
                .map(move |target| SwapRequest::new(origin, target))
        })
}

fn forward_neighbours(board: &Board, coord: Coord) -> ArrayVec<Coord, 2> {
    let mut out = ArrayVec::new();
    if let Some(right) = coord.right(board.columns()) {
        out.push(right);
    }
    if let Some(below) = coord.below(board.rows()) {
        out.push(below);
    }
    out
}

/// Swap, test both moved cells, swap back. `scratch` is unchanged on return.
fn swap_makes_run(scratch: &mut Board, a: Coord, b: Coord) -> bool {
    if scratch.get(a) == scratch.get(b) {
        return false;
    }
    scratch.swap(a, b);
    let hit = in_run(scratch, a) || in_run(scratch, b);
    scratch.swap(a, b);
    hit
}

/// Whether `coord` is part of a horizontal or vertical line of at least three.
fn in_run(board: &Board, coord: Coord) -> bool {
    let Some(kind) = board.get(coord) else {
        return false;
    };
    if kind.is_empty() {
        return false;
    }

    let count = |dr: isize, dc: isize| {
        let mut n = 0;
        let mut r = coord.row as isize + dr;
        let mut c = coord.column as isize + dc;
        while r >= 0 && c >= 0 && board.get(Coord::new(r as usize, c as usize)) == Some(kind) {
            n += 1;
            r += dr;
            c += dc;
        }
        n
    };

    1 + count(0, -1) + count(0, 1) >= MIN_RUN_LEN || 1 + count(-1, 0) + count(1, 0) >= MIN_RUN_LEN
}
