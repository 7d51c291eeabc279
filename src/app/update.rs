use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::keymap::KeyAction;
use crate::app::orchestrator::{Commit, FetchOutcome, FetchRequest};
use crate::app::worker::FetchWorker;
use crate::app::{AppState, InputMode};
use crate::ui;

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Fetch(FetchRequest),
    Quit,
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    worker: &FetchWorker,
) -> Result<()> {
    let first = app.orchestrator.initial_load();
    dispatch(app, worker, first);

    loop {
        for outcome in worker.drain() {
            commit(app, outcome);
        }

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match handle_key(app, key) {
                    Flow::Quit => break,
                    Flow::Fetch(req) => dispatch(app, worker, req),
                    Flow::Continue => {}
                }
            }
        }
    }

    info!("quit requested");
    Ok(())
}

fn dispatch(app: &mut AppState, worker: &FetchWorker, req: FetchRequest) {
    debug!(seq = req.seq, query = ?req.query, "dispatching request");
    if let Err(outcome) = worker.submit(req) {
        commit(app, outcome);
    }
}

/// Apply an outcome and move the selection back to the top of fresh rows.
pub fn commit(app: &mut AppState, outcome: FetchOutcome) -> Commit {
    let result = app.orchestrator.apply(outcome);
    if let Commit::Applied { .. } = result {
        app.selected_index = 0;
    }
    result
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }
    match app.input_mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Normal => match app.keymap.resolve(&key) {
            Some(action) => handle_action(app, action),
            None => Flow::Continue,
        },
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Raw mode swallows SIGINT; Ctrl+C still has to get out.
        return match key.code {
            KeyCode::Char('c') => Flow::Quit,
            _ => Flow::Continue,
        };
    }
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            Flow::Fetch(app.orchestrator.submit_search())
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.orchestrator.search_term_mut().clear();
            Flow::Continue
        }
        KeyCode::Backspace => {
            app.orchestrator.search_term_mut().pop();
            Flow::Continue
        }
        KeyCode::Char(c) => {
            app.orchestrator.search_term_mut().push(c);
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}

pub fn handle_action(app: &mut AppState, action: KeyAction) -> Flow {
    let rows = app.orchestrator.list().len();
    let rpp = app.rows_per_page.max(1);
    match action {
        KeyAction::Quit => return Flow::Quit,
        KeyAction::StartSearch => {
            app.show_help = false;
            app.input_mode = InputMode::Search;
        }
        KeyAction::CycleGender => {
            let next = app.orchestrator.selected_gender().next();
            return Flow::Fetch(app.orchestrator.select_gender(next));
        }
        KeyAction::ResetFilters => return Flow::Fetch(app.orchestrator.reset()),
        KeyAction::JumpPage(page) => {
            // The pagination bar is hidden while search results are shown.
            if !app.orchestrator.list().view_mode().shows_pagination() {
                return Flow::Continue;
            }
            if let Some(req) = app.orchestrator.jump_to_page(page) {
                return Flow::Fetch(req);
            }
        }
        KeyAction::SortBy(column) => {
            app.orchestrator.sort_by(column.path());
            app.selected_index = 0;
        }
        KeyAction::MoveUp => app.selected_index = app.selected_index.saturating_sub(1),
        KeyAction::MoveDown => {
            if app.selected_index + 1 < rows {
                app.selected_index += 1;
            }
        }
        KeyAction::PageUp => app.selected_index = app.selected_index.saturating_sub(rpp),
        KeyAction::PageDown => {
            app.selected_index = app.selected_index.saturating_add(rpp).min(rows.saturating_sub(1));
        }
        KeyAction::ToggleHelp => app.show_help = !app.show_help,
        KeyAction::Ignore => app.show_help = false,
    }
    Flow::Continue
}
