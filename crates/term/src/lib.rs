//! Terminal rendering for the match-3 board.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! [`BoardView`] draws a [`core::BoardSnapshot`] plus HUD state into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes it to the terminal with
//! diffed updates. [`CascadePlayback`] steps through the snapshots of a resolved
//! swap so the cascade is visible.

pub mod board_view;
pub mod fb;
pub mod playback;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_engine as engine;
pub use tui_match3_types as types;

pub use board_view::{tile_glyph, BoardLayout, BoardView, Hud, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use playback::{CascadePlayback, Frame, Phase};
pub use renderer::{changed_spans, encode_diff_into, encode_full_into, Span, TerminalRenderer};
