//! Terminal match-3 runner (default binary).
//!
//! Board size, tile kinds and seed come from `MATCH3_*` environment variables.
//! Logs go to the file named by `MATCH3_LOG_PATH` (the terminal is in raw mode),
//! filtered by `RUST_LOG`.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_match3::engine::{BoardEngine, EngineConfig, SwapOutcome};
use tui_match3::input::{
    handle_key_event, should_quit, PointerMap, SelectionEvent, SelectionHandler,
};
use tui_match3::term::{BoardView, CascadePlayback, FrameBuffer, Hud, TerminalRenderer, Viewport};
use tui_match3::types::{BoardAction, SwapRequest, CASCADE_FRAME_MS, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;
    let config = EngineConfig::from_env().context("reading MATCH3_* configuration")?;
    let engine = BoardEngine::new(&config).context("creating the board")?;
    log::info!(
        "starting {}x{} board with {} kinds, seed {:?}",
        engine.rows(),
        engine.columns(),
        engine.kinds(),
        engine.seed()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(engine));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting on error: {e:#}");
    }
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("MATCH3_LOG_PATH") else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

struct App {
    engine: BoardEngine,
    selection: SelectionHandler,
    playback: CascadePlayback,
    hint: Option<SwapRequest>,
    message: String,
}

impl App {
    fn new(engine: BoardEngine) -> Self {
        let selection = SelectionHandler::new(engine.rows(), engine.columns());
        Self {
            engine,
            selection,
            playback: CascadePlayback::new(CASCADE_FRAME_MS),
            hint: None,
            message: String::from("pick two neighbouring tiles"),
        }
    }

    fn on_selection(&mut self, event: SelectionEvent) -> Result<()> {
        match event {
            SelectionEvent::Idle => {}
            SelectionEvent::Picked(_) => self.message.clear(),
            SelectionEvent::Cancelled => self.message = String::from("selection cleared"),
            SelectionEvent::Swap(request) => self.swap(request)?,
            SelectionEvent::Passthrough(BoardAction::Hint) => {
                self.hint = self.engine.hint();
                self.message = match self.hint {
                    Some(h) => format!("try {} <-> {}", h.origin, h.target),
                    None => String::from("no matching swap, press r"),
                };
            }
            SelectionEvent::Passthrough(BoardAction::Restart) => {
                self.engine.restart()?;
                self.playback.skip();
                self.selection.resize(self.engine.rows(), self.engine.columns());
                self.hint = None;
                self.message = String::from("new board");
            }
            SelectionEvent::Passthrough(_) => {}
        }
        Ok(())
    }

    fn swap(&mut self, request: SwapRequest) -> Result<()> {
        self.hint = None;
        match self.engine.apply(request)? {
            SwapOutcome::Rejected(reason) => {
                self.message = reason.message().to_string();
            }
            SwapOutcome::Accepted(resolution) => {
                self.playback.load(&resolution);
                self.message = if resolution.is_match_free_swap() {
                    String::from("no match")
                } else {
                    format!(
                        "cleared {} in {} step{}",
                        resolution.cleared_cells(),
                        resolution.steps.len(),
                        if resolution.steps.len() == 1 { "" } else { "s" }
                    )
                };
                if self.engine.hint().is_none() {
                    log::info!("board has no matching swap left");
                    self.message.push_str(", no moves left");
                }
            }
        }
        Ok(())
    }

    fn hud(&self) -> Hud {
        Hud {
            cursor: Some(self.selection.cursor()),
            selected: self.selection.selected(),
            hint: self.hint,
            seed: self.engine.seed(),
            kinds: self.engine.kinds(),
            swaps: self.engine.swaps_applied(),
            phase: self.playback.current().map(|f| f.phase.label()),
            message: self.message.clone(),
        }
    }
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    // Board fingerprint, HUD and viewport of the last drawn frame.
    let mut drawn: Option<(u64, Hud, Viewport)> = None;

    loop {
        // Render: the playback frame while a cascade is showing, the live board otherwise.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let live;
        let snap = match app.playback.current() {
            Some(frame) => &frame.board,
            None => {
                live = app.engine.snapshot();
                &live
            }
        };
        let frame_key = (snap.fingerprint(), app.hud(), viewport);
        if drawn.as_ref() != Some(&frame_key) {
            view.render_into(snap, &frame_key.1, viewport, &mut fb);
            term.present(&fb)?;
            drawn = Some(frame_key);
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.playback.skip();
                        let event = app.selection.handle_action(action);
                        app.on_selection(event)?;
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let layout = view.layout(app.engine.rows(), app.engine.columns(), viewport);
                    let (origin_x, origin_y) = layout.cells_origin();
                    let pointer = PointerMap {
                        origin_x,
                        origin_y,
                        cell_w: layout.cell_w,
                        cell_h: layout.cell_h,
                        rows: app.engine.rows(),
                        columns: app.engine.columns(),
                    };
                    if let Some(cell) = pointer.cell_at(mouse.column, mouse.row) {
                        app.playback.skip();
                        let event = app.selection.select(cell);
                        app.on_selection(event)?;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.playback.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
