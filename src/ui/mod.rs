//! Rendering. Everything here reads [`AppState`]; the only write is the
//! visible row count, which the table reports back for paging keys.
pub mod components;
pub mod format;
pub mod table;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::AppState;

pub fn render(f: &mut Frame, app: &mut AppState) {
    let paged = app.orchestrator.list().view_mode().shows_pagination();
    let pagination_h = if paged { 1 } else { 0 };
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(pagination_h),
            Constraint::Length(1),
        ])
        .split(f.area());

    components::render_controls(f, root[0], app);
    table::render_users_table(f, root[1], app);
    if paged {
        components::render_pagination(f, root[2], app);
    }
    components::render_status_bar(f, root[3], app);

    if app.show_help {
        components::render_help(f, f.area(), app);
    }
}
