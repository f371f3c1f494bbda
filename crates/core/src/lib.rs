//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the tile grid and the primitive passes the cascade is
//! built from. It has **no dependencies** on the terminal, input, or I/O:
//!
//! - **Deterministic**: the same seed produces the same boards and refills
//! - **Testable**: every pass works on a plain [`Board`] value
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: `rows x columns` grid with swap, clear, and gravity compaction
//! - [`matches`]: run detection and the clear mask
//! - [`generate`]: initial layout with no run of three
//! - [`rng`]: tile palette and seeded random source
//! - [`snapshot`]: read-only board copies for rendering
//! - [`error`]: construction and engine errors
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{find_runs, generate, seeded_rng, TilePalette};
//!
//! let palette = TilePalette::new(3).unwrap();
//! let mut rng = seeded_rng(12345);
//! let board = generate(5, 5, &palette, &mut rng).unwrap();
//!
//! assert!(find_runs(&board).is_empty());
//! assert!(board.is_settled());
//! ```

pub mod board;
pub mod error;
pub mod generate;
pub mod matches;
pub mod rng;
pub mod snapshot;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ConstructionError, EngineError, Inconsistency};
pub use generate::{completes_run, fill_without_runs, generate, GenerateError};
pub use matches::{find_runs, has_run, MatchMask, Orientation, Run};
pub use rng::{resolve_seed, seeded_rng, TilePalette};
pub use snapshot::BoardSnapshot;
