//! Terminal input module (engine-facing).
//!
//! This crate does not depend on any UI framework. It maps
//! `crossterm` key events into [`crate::types::BoardAction`], keeps the cursor
//! and pending selection, and maps mouse positions onto board cells. Its output
//! is a [`crate::types::SwapRequest`] for the engine.

pub mod handler;
pub mod map;
pub mod pointer;

pub use tui_match3_types as types;

pub use handler::{SelectionEvent, SelectionHandler};
pub use map::{handle_key_event, should_quit};
pub use pointer::PointerMap;
