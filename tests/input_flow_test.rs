use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_match3::engine::{BoardEngine, EngineConfig, SwapOutcome};
use tui_match3::input::{
    handle_key_event, should_quit, PointerMap, SelectionEvent, SelectionHandler,
};
use tui_match3::term::{BoardView, Viewport};
use tui_match3::types::{BoardAction, Coord, SwapRequest};

fn press(handler: &mut SelectionHandler, code: KeyCode) -> SelectionEvent {
    let action = handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).expect("mapped key");
    handler.handle_action(action)
}

#[test]
fn keyboard_selection_reaches_the_engine() {
    let mut engine = BoardEngine::new(&EngineConfig::new(5, 5, 3).with_seed(5)).unwrap();
    let mut handler = SelectionHandler::new(engine.rows(), engine.columns());

    press(&mut handler, KeyCode::Down);
    assert_eq!(
        press(&mut handler, KeyCode::Enter),
        SelectionEvent::Picked(Coord::new(1, 0))
    );
    press(&mut handler, KeyCode::Char('l'));
    let event = press(&mut handler, KeyCode::Char(' '));
    let request = SwapRequest::new(Coord::new(1, 0), Coord::new(1, 1));
    assert_eq!(event, SelectionEvent::Swap(request));

    let outcome = engine.apply(request).unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(engine.swaps_applied(), 1);
}

#[test]
fn diagonal_pick_is_rejected_by_the_engine() {
    let mut engine = BoardEngine::new(&EngineConfig::new(5, 5, 3).with_seed(5)).unwrap();
    let mut handler = SelectionHandler::new(engine.rows(), engine.columns());

    handler.select(Coord::new(0, 0));
    let SelectionEvent::Swap(request) = handler.select(Coord::new(1, 1)) else {
        panic!("second pick should request a swap");
    };
    assert!(matches!(engine.apply(request).unwrap(), SwapOutcome::Rejected(_)));
}

#[test]
fn mouse_click_maps_through_board_layout() {
    let view = BoardView::default();
    let viewport = Viewport::new(40, 20);
    let layout = view.layout(5, 4, viewport);
    let (origin_x, origin_y) = layout.cells_origin();
    let pointer = PointerMap {
        origin_x,
        origin_y,
        cell_w: layout.cell_w,
        cell_h: layout.cell_h,
        rows: 5,
        columns: 4,
    };

    // Right edge of cell (2, 3).
    let x = origin_x + 3 * layout.cell_w + layout.cell_w - 1;
    let y = origin_y + 2 * layout.cell_h;
    assert_eq!(pointer.cell_at(x, y), Some(Coord::new(2, 3)));

    // The border itself is outside the board.
    assert_eq!(pointer.cell_at(layout.frame_x, layout.frame_y), None);
}

#[test]
fn quit_keys_do_not_map_to_actions() {
    let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert!(should_quit(q));
    assert_eq!(handle_key_event(q), None);

    let hint = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
    assert!(!should_quit(hint));
    assert_eq!(handle_key_event(hint), Some(BoardAction::Hint));
}
