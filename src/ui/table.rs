use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::list::SortConfig;
use crate::app::{AppState, Column, Theme};
use crate::ui::format::format_date;

pub const NO_MATCH_MESSAGE: &str = "there is no data match";

/// Header label for `column`, with the direction arrow when it is the active sort.
pub fn header_label(column: Column, sort: &SortConfig) -> String {
    if sort.is_active(column.path()) {
        format!("{} {}", column.title(), sort.direction.glyph())
    } else {
        column.title().to_string()
    }
}

fn header_cell(column: Column, sort: &SortConfig, theme: &Theme) -> Cell<'static> {
    let fg = if sort.is_active(column.path()) { theme.accent } else { theme.title };
    Cell::from(header_label(column, sort)).style(Style::default().fg(fg).add_modifier(Modifier::BOLD))
}

pub fn render_users_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 { app.rows_per_page = body_height; }
    app.clamp_selection();

    let list = app.orchestrator.list();
    let rows_all = list.current_rows();
    let start = (app.selected_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(rows_all.len());
    let slice = &rows_all[start..end];

    let rows: Vec<Row> = slice
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let style = if start + i == app.selected_index {
                Style::default().fg(app.theme.highlight_fg).bg(app.theme.highlight_bg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text)
            };
            Row::new(vec![
                Cell::from(u.login.username.clone()),
                Cell::from(u.full_name()),
                Cell::from(u.email.clone()),
                Cell::from(u.gender.as_str()),
                Cell::from(format_date(&u.registered.date)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(20),
        Constraint::Percentage(32),
        Constraint::Length(8),
        Constraint::Length(20),
    ];

    let sort = list.sort_config();
    let header = Row::new(Column::ALL.iter().map(|c| header_cell(*c, sort, &app.theme)));

    let title = match list.view_mode() {
        crate::app::list::ViewMode::Paged => "Users",
        crate::app::list::ViewMode::SearchResult => "Search results",
    };

    let block = Block::default().title(title).borders(Borders::ALL).border_style(Style::default().fg(app.theme.border));
    let body = block.inner(area);
    let table = Table::new(rows, widths).header(header).block(block).column_spacing(1);
    f.render_widget(table, area);

    // Spans the whole body, below the header line.
    if list.shows_no_match() && body.height > 1 {
        let msg_area = Rect { y: body.y + 1, height: 1, ..body };
        let p = Paragraph::new(NO_MATCH_MESSAGE).style(Style::default().fg(app.theme.warning));
        f.render_widget(p, msg_area);
    }
}
