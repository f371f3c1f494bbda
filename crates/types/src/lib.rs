//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Boards are `rows x columns` grids, both at least [`MIN_DIMENSION`]:
//!
//! - **Row 0** is the top row; gravity pulls tiles towards larger row indices
//! - **Column 0** is the leftmost column
//! - The default field is 5x5 with three tile kinds
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 3 | Smallest accepted row/column count |
//! | `MIN_TILE_KINDS` | 3 | Smallest accepted palette |
//! | `MAX_TILE_KINDS` | 6 | Number of playable kinds |
//! | `MIN_RUN_LEN` | 3 | Shortest run that clears |
//! | `CASCADE_CEILING` | 10000 | Defensive bound on cascade iterations |
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `CASCADE_FRAME_MS` | 180 | How long each cascade phase stays on screen |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{BoardAction, Coord, TileKind};
//!
//! let kind = TileKind::from_str("circle").unwrap();
//! assert_eq!(kind, TileKind::Circle);
//! assert!(TileKind::Empty.is_empty());
//!
//! let a = Coord::new(0, 1);
//! assert!(a.is_adjacent(Coord::new(0, 2)));
//! assert!(!a.is_adjacent(Coord::new(1, 2)));
//!
//! assert_eq!(BoardAction::from_str("select"), Some(BoardAction::Select));
//! ```

/// Smallest accepted row or column count.
pub const MIN_DIMENSION: usize = 3;

/// Smallest accepted number of tile kinds.
pub const MIN_TILE_KINDS: usize = 3;

/// Number of playable tile kinds (every kind except [`TileKind::Empty`]).
pub const MAX_TILE_KINDS: usize = 6;

/// Shortest run of equal kinds that is cleared.
pub const MIN_RUN_LEN: usize = 3;

/// Defensive ceiling on clear/compact/refill iterations for one swap.
///
/// A cascade this long only happens if refill is broken.
pub const CASCADE_CEILING: u32 = 10_000;

/// Default board height (the original field is 5x5).
pub const DEFAULT_ROWS: usize = 5;

/// Default board width.
pub const DEFAULT_COLUMNS: usize = 5;

/// Default palette size (circle, square, triangle).
pub const DEFAULT_TILE_KINDS: usize = 3;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// How long each cascade phase snapshot stays on screen.
pub const CASCADE_FRAME_MS: u32 = 180;

/// The kind of tile occupying a cell.
///
/// `Empty` only exists while a cascade is in progress: a settled board never
/// contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Circle,
    Square,
    Triangle,
    Diamond,
    Star,
    Heart,
}

impl TileKind {
    /// Playable kinds in palette order. A palette of `n` kinds uses the first `n`.
    pub const PLAYABLE: [TileKind; MAX_TILE_KINDS] = [
        TileKind::Circle,
        TileKind::Square,
        TileKind::Triangle,
        TileKind::Diamond,
        TileKind::Star,
        TileKind::Heart,
    ];

    /// Whether the cell holds no tile.
    pub fn is_empty(self) -> bool {
        self == TileKind::Empty
    }

    /// Parse a tile kind from its name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("Square"), Some(TileKind::Square));
    /// assert_eq!(TileKind::from_str("t"), Some(TileKind::Triangle));
    /// assert_eq!(TileKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" | "." => Some(TileKind::Empty),
            "circle" | "c" => Some(TileKind::Circle),
            "square" | "s" => Some(TileKind::Square),
            "triangle" | "t" => Some(TileKind::Triangle),
            "diamond" | "d" => Some(TileKind::Diamond),
            "star" | "r" => Some(TileKind::Star),
            "heart" | "h" => Some(TileKind::Heart),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Empty => "empty",
            TileKind::Circle => "circle",
            TileKind::Square => "square",
            TileKind::Triangle => "triangle",
            TileKind::Diamond => "diamond",
            TileKind::Star => "star",
            TileKind::Heart => "heart",
        }
    }

    /// Compact byte encoding: 0 for `Empty`, 1.. for playable kinds.
    pub fn as_u8(self) -> u8 {
        match self {
            TileKind::Empty => 0,
            TileKind::Circle => 1,
            TileKind::Square => 2,
            TileKind::Triangle => 3,
            TileKind::Diamond => 4,
            TileKind::Star => 5,
            TileKind::Heart => 6,
        }
    }

    /// Inverse of [`TileKind::as_u8`].
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(TileKind::Empty),
            1..=6 => Some(TileKind::PLAYABLE[(v - 1) as usize]),
            _ => None,
        }
    }
}

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row and column distance to `other`.
    pub fn delta(self, other: Coord) -> (usize, usize) {
        (
            self.row.abs_diff(other.row),
            self.column.abs_diff(other.column),
        )
    }

    /// Orthogonal adjacency: exactly one step along exactly one axis.
    ///
    /// Diagonal neighbours and the cell itself are not adjacent.
    pub fn is_adjacent(self, other: Coord) -> bool {
        matches!(self.delta(other), (0, 1) | (1, 0))
    }

    /// The cell to the right, if any.
    pub fn right(self, columns: usize) -> Option<Coord> {
        (self.column + 1 < columns).then(|| Coord::new(self.row, self.column + 1))
    }

    /// The cell below, if any.
    pub fn below(self, rows: usize) -> Option<Coord> {
        (self.row + 1 < rows).then(|| Coord::new(self.row + 1, self.column))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A request to exchange the tiles at two cells.
///
/// The pair is unordered: `origin` is simply the cell selected first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    pub origin: Coord,
    pub target: Coord,
}

impl SwapRequest {
    pub fn new(origin: Coord, target: Coord) -> Self {
        Self { origin, target }
    }

    /// Whether two requests name the same pair of cells in either order.
    pub fn same_pair(&self, other: &SwapRequest) -> bool {
        (self.origin == other.origin && self.target == other.target)
            || (self.origin == other.target && self.target == other.origin)
    }
}

/// Player actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Move the cursor one column left
    CursorLeft,
    /// Move the cursor one column right
    CursorRight,
    /// Select the cell under the cursor (first pick or swap target)
    Select,
    /// Drop the current selection
    Cancel,
    /// Highlight a swap that would clear tiles
    Hint,
    /// Generate a fresh board
    Restart,
}

impl BoardAction {
    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::BoardAction;
    ///
    /// assert_eq!(BoardAction::from_str("cursorLeft"), Some(BoardAction::CursorLeft));
    /// assert_eq!(BoardAction::from_str("restart"), Some(BoardAction::Restart));
    /// assert_eq!(BoardAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(BoardAction::CursorUp),
            "cursordown" => Some(BoardAction::CursorDown),
            "cursorleft" => Some(BoardAction::CursorLeft),
            "cursorright" => Some(BoardAction::CursorRight),
            "select" => Some(BoardAction::Select),
            "cancel" => Some(BoardAction::Cancel),
            "hint" => Some(BoardAction::Hint),
            "restart" => Some(BoardAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardAction::CursorUp => "cursorUp",
            BoardAction::CursorDown => "cursorDown",
            BoardAction::CursorLeft => "cursorLeft",
            BoardAction::CursorRight => "cursorRight",
            BoardAction::Select => "select",
            BoardAction::Cancel => "cancel",
            BoardAction::Hint => "hint",
            BoardAction::Restart => "restart",
        }
    }
}
