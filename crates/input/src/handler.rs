//! Cursor and selection state.
//!
//! The player picks two cells: the first select marks the origin, the second
//! produces a [`SwapRequest`]. Adjacency is not checked here; the engine decides
//! whether the pair is legal.

use crate::types::{BoardAction, Coord, SwapRequest};

/// What an action did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Cursor moved or nothing changed
    Idle,
    /// Origin cell marked
    Picked(Coord),
    /// Selection dropped
    Cancelled,
    /// Second cell chosen
    Swap(SwapRequest),
    /// Action meant for the game loop (hint, restart)
    Passthrough(BoardAction),
}

/// Tracks cursor position and the pending origin cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHandler {
    rows: usize,
    columns: usize,
    cursor: Coord,
    selected: Option<Coord>,
}

impl SelectionHandler {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cursor: Coord::new(0, 0),
            selected: None,
        }
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Adopt new board dimensions, clamping the cursor and dropping the selection.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        self.rows = rows;
        self.columns = columns;
        self.cursor = Coord::new(
            self.cursor.row.min(rows.saturating_sub(1)),
            self.cursor.column.min(columns.saturating_sub(1)),
        );
        self.selected = None;
    }

    pub fn handle_action(&mut self, action: BoardAction) -> SelectionEvent {
        match action {
            BoardAction::CursorUp => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
                SelectionEvent::Idle
            }
            BoardAction::CursorDown => {
                if self.cursor.row + 1 < self.rows {
                    self.cursor.row += 1;
                }
                SelectionEvent::Idle
            }
            BoardAction::CursorLeft => {
                self.cursor.column = self.cursor.column.saturating_sub(1);
                SelectionEvent::Idle
            }
            BoardAction::CursorRight => {
                if self.cursor.column + 1 < self.columns {
                    self.cursor.column += 1;
                }
                SelectionEvent::Idle
            }
            BoardAction::Select => self.select(self.cursor),
            BoardAction::Cancel => self.cancel(),
            BoardAction::Hint | BoardAction::Restart => {
                if action == BoardAction::Restart {
                    self.selected = None;
                }
                SelectionEvent::Passthrough(action)
            }
        }
    }

    /// Select `cell` directly (mouse click). Also moves the cursor there.
    pub fn select(&mut self, cell: Coord) -> SelectionEvent {
        if cell.row >= self.rows || cell.column >= self.columns {
            return SelectionEvent::Idle;
        }
        self.cursor = cell;
        match self.selected.take() {
            None => {
                self.selected = Some(cell);
                SelectionEvent::Picked(cell)
            }
            Some(origin) if origin == cell => SelectionEvent::Cancelled,
            Some(origin) => SelectionEvent::Swap(SwapRequest::new(origin, cell)),
        }
    }

    pub fn cancel(&mut self) -> SelectionEvent {
        match self.selected.take() {
            Some(_) => SelectionEvent::Cancelled,
            None => SelectionEvent::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_clamped_to_board() {
        let mut h = SelectionHandler::new(3, 4);
        h.handle_action(BoardAction::CursorUp);
        h.handle_action(BoardAction::CursorLeft);
        assert_eq!(h.cursor(), Coord::new(0, 0));

        for _ in 0..10 {
            h.handle_action(BoardAction::CursorDown);
            h.handle_action(BoardAction::CursorRight);
        }
        assert_eq!(h.cursor(), Coord::new(2, 3));
    }

    #[test]
    fn two_selects_make_a_swap() {
        let mut h = SelectionHandler::new(5, 5);
        assert_eq!(
            h.handle_action(BoardAction::Select),
            SelectionEvent::Picked(Coord::new(0, 0))
        );
        h.handle_action(BoardAction::CursorRight);
        assert_eq!(
            h.handle_action(BoardAction::Select),
            SelectionEvent::Swap(SwapRequest::new(Coord::new(0, 0), Coord::new(0, 1)))
        );
        assert_eq!(h.selected(), None);
    }

    #[test]
    fn selecting_origin_again_cancels() {
        let mut h = SelectionHandler::new(5, 5);
        h.select(Coord::new(2, 2));
        assert_eq!(h.select(Coord::new(2, 2)), SelectionEvent::Cancelled);
        assert_eq!(h.selected(), None);
    }

    #[test]
    fn distant_cells_still_produce_a_request() {
        let mut h = SelectionHandler::new(5, 5);
        h.select(Coord::new(0, 0));
        assert_eq!(
            h.select(Coord::new(3, 3)),
            SelectionEvent::Swap(SwapRequest::new(Coord::new(0, 0), Coord::new(3, 3)))
        );
    }

    #[test]
    fn outside_click_is_ignored() {
        let mut h = SelectionHandler::new(5, 5);
        assert_eq!(h.select(Coord::new(5, 0)), SelectionEvent::Idle);
        assert_eq!(h.selected(), None);
        assert_eq!(h.cursor(), Coord::new(0, 0));
    }

    #[test]
    fn cancel_and_passthrough() {
        let mut h = SelectionHandler::new(5, 5);
        assert_eq!(h.handle_action(BoardAction::Cancel), SelectionEvent::Idle);
        h.select(Coord::new(1, 1));
        assert_eq!(h.handle_action(BoardAction::Cancel), SelectionEvent::Cancelled);

        h.select(Coord::new(1, 1));
        assert_eq!(
            h.handle_action(BoardAction::Restart),
            SelectionEvent::Passthrough(BoardAction::Restart)
        );
        assert_eq!(h.selected(), None);
        assert_eq!(
            h.handle_action(BoardAction::Hint),
            SelectionEvent::Passthrough(BoardAction::Hint)
        );
    }
}
