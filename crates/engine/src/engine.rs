//! BoardEngine - owns the board and runs swaps to a settled state
//!
//! The engine is synchronous: construction, [`BoardEngine::attempt_swap`] and
//! [`BoardEngine::restart`] all run to completion before returning.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::cascade;
use crate::config::EngineConfig;
use crate::core::{
    generate, resolve_seed, seeded_rng, Board, BoardSnapshot, ConstructionError, EngineError,
    GenerateError, TilePalette,
};
use crate::hint;
use crate::outcome::{RejectReason, Resolution, SwapOutcome};
use crate::types::{Coord, SwapRequest, CASCADE_CEILING};

/// Match-3 board engine, generic over its random source.
#[derive(Debug, Clone)]
pub struct BoardEngine<R = StdRng> {
    board: Board,
    palette: TilePalette,
    rng: R,
    /// Seed of the default source; `None` when the caller injected one
    seed: Option<u64>,
    swaps_applied: u64,
    cascade_ceiling: u32,
}

impl BoardEngine<StdRng> {
    /// Build an engine from `config`, seeding a `StdRng`.
    ///
    /// Without a configured seed a random one is chosen; [`BoardEngine::seed`]
    /// reports it so the game can be replayed.
    pub fn new(config: &EngineConfig) -> Result<Self, GenerateError> {
        let seed = resolve_seed(config.seed);
        let mut engine = Self::with_rng(
            config.rows,
            config.columns,
            config.kinds,
            seeded_rng(seed),
        )?;
        engine.seed = Some(seed);
        Ok(engine)
    }
}

impl<R: Rng> BoardEngine<R> {
    /// Build an engine with an injected random source and generate the first board.
    pub fn with_rng(
        rows: usize,
        columns: usize,
        kinds: usize,
        mut rng: R,
    ) -> Result<Self, GenerateError> {
        let palette = TilePalette::new(kinds)?;
        let board = generate(rows, columns, &palette, &mut rng)?;
        Ok(Self {
            board,
            palette,
            rng,
            seed: None,
            swaps_applied: 0,
            cascade_ceiling: CASCADE_CEILING,
        })
    }

    /// Wrap an existing board, e.g. a hand-built position.
    ///
    /// The board is taken as is; refills draw from the first `kinds` kinds.
    pub fn with_board(board: Board, kinds: usize, rng: R) -> Result<Self, ConstructionError> {
        let palette = TilePalette::new(kinds)?;
        Ok(Self {
            board,
            palette,
            rng,
            seed: None,
            swaps_applied: 0,
            cascade_ceiling: CASCADE_CEILING,
        })
    }

    /// Override the cascade iteration ceiling.
    pub fn with_cascade_ceiling(mut self, ceiling: u32) -> Self {
        self.cascade_ceiling = ceiling;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the current grid for the renderer.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn kinds(&self) -> usize {
        self.palette.len()
    }

    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Accepted swaps since construction or the last restart.
    pub fn swaps_applied(&self) -> u64 {
        self.swaps_applied
    }

    /// Replace the board with a freshly generated one.
    ///
    /// The random source keeps its position, so a restarted board differs from
    /// the first one but the whole session stays reproducible from the seed.
    pub fn restart(&mut self) -> Result<(), GenerateError> {
        self.board = generate(
            self.board.rows(),
            self.board.columns(),
            &self.palette,
            &mut self.rng,
        )?;
        self.swaps_applied = 0;
        info!("board restarted");
        Ok(())
    }

    /// Swap the tiles at `a` and `b` and resolve the resulting cascade.
    ///
    /// - Out-of-bounds cells are an error; nothing changes.
    /// - The same cell twice, diagonal or distant cells are `Rejected`; nothing changes.
    /// - Otherwise the swap is applied and kept even if it clears nothing.
    /// - If the cascade hits an internal inconsistency the error is returned and
    ///   the board and swap count stay as they were.
    pub fn attempt_swap(&mut self, a: Coord, b: Coord) -> Result<SwapOutcome, EngineError> {
        for coord in [a, b] {
            if !self.board.contains(coord) {
                return Err(EngineError::OutOfBounds {
                    coord,
                    rows: self.board.rows(),
                    columns: self.board.columns(),
                });
            }
        }

        if a == b {
            debug!("swap {} <-> {} rejected: same cell", a, b);
            return Ok(SwapOutcome::Rejected(RejectReason::SameCell));
        }
        if !a.is_adjacent(b) {
            debug!("swap {} <-> {} rejected: not adjacent", a, b);
            return Ok(SwapOutcome::Rejected(RejectReason::NotAdjacent));
        }

        // Resolve on a copy; the engine's board only changes when the cascade settles.
        let mut next = self.board.clone();
        next.swap(a, b);
        let swapped = BoardSnapshot::from(&next);

        let palette = &self.palette;
        let rng = &mut self.rng;
        let steps = cascade::resolve(&mut next, |_| palette.draw(rng), self.cascade_ceiling)?;
        self.board = next;
        self.swaps_applied += 1;

        let resolution = Resolution {
            request: SwapRequest::new(a, b),
            swapped,
            steps,
        };
        debug!(
            "swap {} <-> {} accepted: {} cascade steps, {} cells cleared",
            a,
            b,
            resolution.steps.len(),
            resolution.cleared_cells()
        );
        Ok(SwapOutcome::Accepted(resolution))
    }

    /// Apply a swap request from the input layer.
    pub fn apply(&mut self, request: SwapRequest) -> Result<SwapOutcome, EngineError> {
        self.attempt_swap(request.origin, request.target)
    }

    /// A swap that would clear tiles on the current board, if any.
    pub fn hint(&self) -> Option<SwapRequest> {
        hint::first_matching_swap(&self.board)
    }
}
