//! Match-3 board engine.
//!
//! [`BoardEngine`] owns one board and turns swap requests into settled boards:
//!
//! 1. Validate the pair (in bounds, orthogonally adjacent)
//! 2. Exchange the two tiles
//! 3. Clear every run, let tiles fall, refill, and repeat until no run is left
//!
//! Every iteration is reported as a [`CascadeStep`] with board snapshots after
//! clearing, compaction and refill, so a renderer can replay the cascade.
//!
//! # Example
//!
//! ```
//! use tui_match3_engine::{BoardEngine, EngineConfig, SwapOutcome};
//! use tui_match3_engine::types::Coord;
//!
//! let mut engine = BoardEngine::new(&EngineConfig::new(5, 4, 3).with_seed(7)).unwrap();
//!
//! // Diagonal swaps are refused and leave the board alone.
//! let before = engine.snapshot();
//! let outcome = engine.attempt_swap(Coord::new(0, 0), Coord::new(1, 1)).unwrap();
//! assert!(matches!(outcome, SwapOutcome::Rejected(_)));
//! assert_eq!(engine.snapshot(), before);
//!
//! // Neighbour swaps are always applied and end on a settled board.
//! let outcome = engine.attempt_swap(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
//! assert!(outcome.is_accepted());
//! assert!(engine.board().is_settled());
//! ```

pub mod cascade;
pub mod config;
pub mod engine;
pub mod hint;
pub mod outcome;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use config::{ConfigError, EngineConfig};
pub use engine::BoardEngine;
pub use hint::{find_matching_swaps, first_matching_swap};
pub use outcome::{CascadeStep, RejectReason, Resolution, SwapOutcome};
