use tui_match3::core::{Board, BoardSnapshot};
use tui_match3::term::{tile_glyph, BoardView, Hud, Viewport};
use tui_match3::types::TileKind::{Circle as A, Empty as E, Square as B, Triangle as C};
use tui_match3::types::{Coord, SwapRequest};

fn snapshot() -> BoardSnapshot {
    let board = Board::from_rows(vec![
        vec![A, A, B, A],
        vec![B, C, A, C],
        vec![C, B, C, B],
        vec![A, C, B, A],
        vec![E, A, C, B],
    ])
    .unwrap();
    BoardSnapshot::from(&board)
}

#[test]
fn term_view_renders_border_corners() {
    // 4 columns * 3 chars + border = 14 wide, 5 rows + border = 7 high.
    let fb = BoardView::default().render(&snapshot(), &Hud::default(), Viewport::new(14, 7));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(13, 6).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_glyph_in_three_wide_cell() {
    let fb = BoardView::default().render(&snapshot(), &Hud::default(), Viewport::new(14, 7));

    // Cell (0, 0) spans x = 1..=3 on y = 1; the glyph sits in the middle.
    assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    assert_eq!(fb.get(2, 1).unwrap().ch, tile_glyph(A).0);
    assert_eq!(fb.get(3, 1).unwrap().ch, ' ');

    // Empty cell (4, 0).
    assert_eq!(fb.get(2, 5).unwrap().ch, tile_glyph(E).0);
    // Triangle at (1, 1).
    assert_eq!(fb.get(5, 2).unwrap().ch, tile_glyph(C).0);
}

#[test]
fn term_view_highlights_cursor_selection_and_hint() {
    let view = BoardView::default();
    let vp = Viewport::new(14, 7);
    let plain = view.render(&snapshot(), &Hud::default(), vp);
    let hud = Hud {
        cursor: Some(Coord::new(0, 0)),
        selected: Some(Coord::new(1, 1)),
        hint: Some(SwapRequest::new(Coord::new(3, 2), Coord::new(3, 3))),
        ..Hud::default()
    };
    let fb = view.render(&snapshot(), &hud, vp);

    let bg = |fb: &tui_match3::term::FrameBuffer, x, y| fb.get(x, y).unwrap().style.bg;
    let board_bg = bg(&plain, 2, 1);

    let cursor_bg = bg(&fb, 2, 1);
    let selected_bg = bg(&fb, 5, 2);
    let hint_bg = bg(&fb, 8, 4);
    assert_ne!(cursor_bg, board_bg);
    assert_ne!(selected_bg, board_bg);
    assert_ne!(hint_bg, board_bg);
    assert_eq!(bg(&fb, 11, 4), hint_bg);
    assert_ne!(cursor_bg, selected_bg);

    // Untouched cell keeps the board background.
    assert_eq!(bg(&fb, 2, 3), board_bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let hud = Hud {
        seed: Some(42),
        kinds: 3,
        swaps: 7,
        phase: Some("CLEAR"),
        message: String::from("cleared 3 in 1 step"),
        ..Hud::default()
    };
    let fb = BoardView::default().render(&snapshot(), &hud, Viewport::new(60, 12));

    assert!(fb.contains_text("SIZE 5x4"));
    assert!(fb.contains_text("KINDS 3"));
    assert!(fb.contains_text("SEED 42"));
    assert!(fb.contains_text("SWAPS 7"));
    assert!(fb.contains_text("CLEAR"));
    assert!(fb.contains_text("cleared 3 in 1 step"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let hud = Hud {
        seed: Some(42),
        ..Hud::default()
    };
    let fb = BoardView::default().render(&snapshot(), &hud, Viewport::new(20, 7));
    assert!(!fb.contains_text("SEED"));
}

#[test]
fn term_view_clips_boards_wider_than_the_screen() {
    // Wide enough that cell positions leave the u16 range.
    let board = Board::filled(3, 30_000, A).unwrap();
    let snap = BoardSnapshot::from(&board);
    let hud = Hud {
        cursor: Some(Coord::new(2, 29_999)),
        ..Hud::default()
    };
    let fb = BoardView::default().render(&snap, &hud, Viewport::new(80, 24));

    assert_eq!((fb.width(), fb.height()), (80, 24));
    // Frame is pinned to the left edge; the first visible cell is drawn.
    let layout = BoardView::default().layout(3, 30_000, Viewport::new(80, 24));
    let (x, y) = layout.cells_origin();
    assert_eq!(fb.get(x + 1, y).unwrap().ch, tile_glyph(A).0);
    assert_eq!(fb.get(0, layout.frame_y).unwrap().ch, '┌');
}
