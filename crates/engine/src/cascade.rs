//! The resolve loop: clear every run, let tiles fall, refill, repeat until no
//! run is left.
//!
//! Refill is not constrained: new tiles may line up and cascade again. The loop
//! has no cap on legitimate cascades, only an iteration ceiling that reports an
//! [`Inconsistency`] when it is hit.

use log::trace;

use crate::core::{find_runs, Board, BoardSnapshot, Inconsistency, MatchMask};
use crate::outcome::CascadeStep;
use crate::types::{Coord, TileKind};

/// Run cascade iterations on `board` until it has no run.
///
/// `refill` supplies the kind for each empty cell after compaction, in
/// row-major order. Returns one [`CascadeStep`] per iteration.
pub fn resolve(
    board: &mut Board,
    mut refill: impl FnMut(Coord) -> TileKind,
    ceiling: u32,
) -> Result<Vec<CascadeStep>, Inconsistency> {
    let mut steps = Vec::new();
    let mut iterations: u32 = 0;

    loop {
        let runs = find_runs(board);
        if runs.is_empty() {
            break;
        }
        if iterations >= ceiling {
            return Err(Inconsistency::CascadeCeiling { iterations });
        }
        iterations += 1;

        // Mask is built from the full pre-clear run list.
        let mask = MatchMask::from_runs(board, &runs);
        let cleared = board.clear_mask(&mask);
        let after_clear = BoardSnapshot::from(&*board);

        let moved = board.compact();
        let after_compact = BoardSnapshot::from(&*board);

        let refilled = refill_empty(board, &mut refill)?;
        let after_refill = BoardSnapshot::from(&*board);

        trace!(
            "cascade step {}: {} runs, {} cleared, {} moved, {} refilled",
            iterations,
            runs.len(),
            cleared,
            moved,
            refilled
        );

        steps.push(CascadeStep {
            runs,
            cleared,
            after_clear,
            after_compact,
            after_refill,
        });
    }

    Ok(steps)
}

/// Give every empty cell a new tile. Fails if any cell is still empty afterwards.
pub fn refill_empty(
    board: &mut Board,
    mut refill: impl FnMut(Coord) -> TileKind,
) -> Result<usize, Inconsistency> {
    let empty: Vec<Coord> = board.empty_cells().collect();
    for &coord in &empty {
        board.set(coord, refill(coord));
    }
    if let Some(coord) = board.empty_cells().next() {
        return Err(Inconsistency::UnfilledCell { coord });
    }
    Ok(empty.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::has_run;
    use crate::types::TileKind::{Circle as C, Diamond as D, Empty as E, Square as S, Triangle as T};
    use crate::types::CASCADE_CEILING;

    #[test]
    fn settled_board_produces_no_steps() {
        let mut board =
            Board::from_rows(vec![vec![C, S, T], vec![S, T, C], vec![T, C, S]]).unwrap();
        let before = board.clone();
        let steps = resolve(&mut board, |_| D, CASCADE_CEILING).unwrap();
        assert!(steps.is_empty());
        assert_eq!(board, before);
    }

    /// Refill source cycling through the palette, never three equal in a row.
    fn cycling() -> impl FnMut(Coord) -> TileKind {
        let mut n = 0;
        move |_| {
            n += 1;
            TileKind::PLAYABLE[n % TileKind::PLAYABLE.len()]
        }
    }

    #[test]
    fn single_step_clears_compacts_and_refills() {
        let mut board = Board::from_rows(vec![
            vec![S, T, S],
            vec![C, C, C],
            vec![T, S, T],
        ])
        .unwrap();

        let steps = resolve(&mut board, cycling(), CASCADE_CEILING).unwrap();
        assert_eq!(steps.len(), 1);

        let step = &steps[0];
        assert_eq!(step.cleared, 3);
        assert_eq!(step.after_clear.row(1), Some(&[E, E, E][..]));
        assert_eq!(step.after_compact.row(0), Some(&[E, E, E][..]));
        assert_eq!(step.after_compact.row(1), Some(&[S, T, S][..]));
        assert_eq!(step.after_refill.row(0), Some(&[S, T, D][..]));
        assert!(!has_run(&board));
    }

    #[test]
    fn refill_runs_cascade_again() {
        let mut board = Board::from_rows(vec![
            vec![S, T, S],
            vec![C, C, C],
            vec![T, S, T],
        ])
        .unwrap();

        // First refill lines up three diamonds, the second breaks the pattern.
        let mut fills = [D, D, D, C, S, T].into_iter();
        let steps = resolve(&mut board, |_| fills.next().unwrap_or(C), CASCADE_CEILING).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].after_refill.row(0), Some(&[D, D, D][..]));
        assert_eq!(steps[1].after_refill.row(0), Some(&[C, S, T][..]));
        assert!(board.is_settled());
    }

    #[test]
    fn constant_refill_hits_the_ceiling() {
        let mut board = Board::from_rows(vec![
            vec![C, C, C],
            vec![S, T, S],
            vec![T, S, T],
        ])
        .unwrap();

        let err = resolve(&mut board, |_| C, 25).unwrap_err();
        assert_eq!(err, Inconsistency::CascadeCeiling { iterations: 25 });
    }

    #[test]
    fn refill_leaving_empty_cells_is_reported() {
        let mut board = Board::from_rows(vec![
            vec![C, C, C],
            vec![S, T, S],
            vec![T, S, T],
        ])
        .unwrap();

        let err = resolve(&mut board, |_| E, CASCADE_CEILING).unwrap_err();
        assert_eq!(
            err,
            Inconsistency::UnfilledCell {
                coord: Coord::new(0, 0)
            }
        );
    }

    #[test]
    fn compaction_conserves_column_contents() {
        let mut board = Board::from_rows(vec![
            vec![T, S, C, S],
            vec![S, C, T, T],
            vec![C, C, C, S],
            vec![T, S, T, C],
        ])
        .unwrap();

        let steps = resolve(&mut board, cycling(), CASCADE_CEILING).unwrap();
        let step = &steps[0];

        for column in 0..4 {
            let mut before: Vec<_> = (0..4)
                .map(|row| step.after_clear.get(Coord::new(row, column)).unwrap())
                .filter(|k| !k.is_empty())
                .collect();
            let mut after: Vec<_> = (0..4)
                .map(|row| step.after_compact.get(Coord::new(row, column)).unwrap())
                .filter(|k| !k.is_empty())
                .collect();
            before.sort_by_key(|k| k.as_u8());
            after.sort_by_key(|k| k.as_u8());
            assert_eq!(before, after, "column {} changed contents", column);
        }
    }
}
