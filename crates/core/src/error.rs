//! Error types for board construction and swap resolution.
//!
//! Rejected swaps are not errors: see `SwapOutcome::Rejected` in the engine crate.

use crate::types::Coord;

/// Invalid board parameters. Fatal to construction, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("board needs at least {min} rows, got {rows}")]
    TooFewRows { rows: usize, min: usize },

    #[error("board needs at least {min} columns, got {columns}")]
    TooFewColumns { columns: usize, min: usize },

    #[error("at least {min} tile kinds are required, got {kinds}")]
    TooFewKinds { kinds: usize, min: usize },

    #[error("at most {max} tile kinds are available, got {kinds}")]
    TooManyKinds { kinds: usize, max: usize },

    #[error("row {row} has {len} cells, expected {columns}")]
    RaggedRows { row: usize, len: usize, columns: usize },
}

/// A logic defect detected while resolving a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Inconsistency {
    #[error("cascade did not settle after {iterations} iterations")]
    CascadeCeiling { iterations: u32 },

    #[error("cell {coord} is still empty after refill")]
    UnfilledCell { coord: Coord },

    #[error("no tile kind fits cell {coord} during generation")]
    GenerationExhausted { coord: Coord },
}

/// Errors returned by engine commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell {coord} is outside the {rows}x{columns} board")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        columns: usize,
    },

    #[error("internal inconsistency: {0}")]
    InternalInconsistency(#[from] Inconsistency),
}
