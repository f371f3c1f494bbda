//! Results of a swap attempt.

use crate::core::{BoardSnapshot, Run};
use crate::types::SwapRequest;

/// Why a swap was refused. The board is untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Both coordinates name the same cell
    SameCell,
    /// The cells are not orthogonal neighbours
    NotAdjacent,
}

impl RejectReason {
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::SameCell => "cannot swap a tile with itself",
            RejectReason::NotAdjacent => "tiles must be side by side",
        }
    }
}

/// One clear -> compact -> refill iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    /// Runs detected on the board before clearing
    pub runs: Vec<Run>,
    /// Distinct cells cleared (crossing runs count their shared cell once)
    pub cleared: usize,
    /// Board with the cleared cells empty
    pub after_clear: BoardSnapshot,
    /// Board after gravity, empty cells at the top of their columns
    pub after_compact: BoardSnapshot,
    /// Board after refill, no empty cells
    pub after_refill: BoardSnapshot,
}

/// What an accepted swap did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub request: SwapRequest,
    /// Board right after the two tiles were exchanged
    pub swapped: BoardSnapshot,
    /// Cascade iterations in order; empty when the swap made no run
    pub steps: Vec<CascadeStep>,
}

impl Resolution {
    /// The swap was kept although it cleared nothing.
    pub fn is_match_free_swap(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total cells cleared over the whole cascade.
    pub fn cleared_cells(&self) -> usize {
        self.steps.iter().map(|s| s.cleared).sum()
    }

    /// The settled board the engine ended on.
    pub fn final_board(&self) -> &BoardSnapshot {
        self.steps
            .last()
            .map_or(&self.swapped, |step| &step.after_refill)
    }

    /// The post-swap board followed by the board after each cascade iteration.
    ///
    /// A swap without a run yields exactly one snapshot.
    pub fn snapshots(&self) -> Vec<&BoardSnapshot> {
        std::iter::once(&self.swapped)
            .chain(self.steps.iter().map(|s| &s.after_refill))
            .collect()
    }
}

/// Result of [`BoardEngine::attempt_swap`](crate::BoardEngine::attempt_swap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Rejected(RejectReason),
    Accepted(Resolution),
}

impl SwapOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SwapOutcome::Accepted(_))
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            SwapOutcome::Accepted(r) => Some(r),
            SwapOutcome::Rejected(_) => None,
        }
    }

    pub fn into_resolution(self) -> Option<Resolution> {
        match self {
            SwapOutcome::Accepted(r) => Some(r),
            SwapOutcome::Rejected(_) => None,
        }
    }
}
