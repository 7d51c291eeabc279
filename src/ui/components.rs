//! Shared UI components (controls header, pagination bar, status bar, help overlay).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::orchestrator::MAX_PAGE;
use crate::app::{AppState, Column, InputMode};

/// Search prompt and gender selector.
pub fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let searching = app.input_mode == InputMode::Search;
    let cursor = if searching { "▏" } else { "" };
    let term_style = if searching {
        Style::default().fg(app.theme.highlight_fg)
    } else {
        Style::default().fg(app.theme.text)
    };
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(app.theme.header_fg)),
        Span::styled(format!("{}{}", app.orchestrator.search_term(), cursor), term_style),
        Span::raw("    "),
        Span::styled("Gender: ", Style::default().fg(app.theme.header_fg)),
        Span::styled(app.orchestrator.gender_filter().label(), Style::default().fg(app.theme.accent)),
    ]);
    let p = Paragraph::new(line).block(
        Block::default()
            .title("User Dashboard")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().bg(app.theme.header_bg));
    f.render_widget(p, area);
}

/// Page buttons `[1] 2 3`; the active page is bracketed.
pub fn pagination_line(current: Option<u32>) -> String {
    (1..=MAX_PAGE)
        .map(|p| if Some(p) == current { format!("[{p}]") } else { format!(" {p} ") })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_pagination(f: &mut Frame, area: Rect, app: &AppState) {
    let p = Paragraph::new(format!("Page: {}", pagination_line(app.orchestrator.current_page())))
        .style(Style::default().fg(app.theme.accent));
    f.render_widget(p, area);
}

/// Render the bottom status bar with mode, counts and the loading flag.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let list = app.orchestrator.list();
    let mode = match (app.input_mode, list.view_mode()) {
        (InputMode::Search, _) => "SEARCH",
        (InputMode::Normal, crate::app::list::ViewMode::Paged) => "PAGED",
        (InputMode::Normal, crate::app::list::ViewMode::SearchResult) => "RESULTS",
    };
    let sort = match list.sort_config().key.as_deref() {
        Some(key) => format!("  sort:{key} {}", list.sort_config().direction.glyph()),
        None => String::new(),
    };
    let loading = if app.orchestrator.is_loading() { "  loading…" } else { "" };
    let msg = format!("mode: {mode}  rows:{}{sort}{loading}  ?: help  q: quit", list.len());
    let p = Paragraph::new(msg).style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(p, area);
}

/// Keybinding overlay listing the current bindings.
pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let km = &app.keymap;
    let mut entries: Vec<(String, KeyAction)> = vec![
        ("Search".into(), KeyAction::StartSearch),
        ("Cycle gender".into(), KeyAction::CycleGender),
        ("Reset filters".into(), KeyAction::ResetFilters),
        ("Move up".into(), KeyAction::MoveUp),
        ("Move down".into(), KeyAction::MoveDown),
        ("Page up".into(), KeyAction::PageUp),
        ("Page down".into(), KeyAction::PageDown),
        ("Quit".into(), KeyAction::Quit),
    ];
    for page in 1..=MAX_PAGE {
        entries.push((format!("Page {page}"), KeyAction::JumpPage(page)));
    }
    for column in Column::ALL {
        entries.push((format!("Sort by {}", column.title()), KeyAction::SortBy(column)));
    }

    let label_w = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut lines = vec![Line::from(Span::styled("Keys:", Style::default().add_modifier(Modifier::BOLD)))];
    for (label, action) in &entries {
        let keys = km.keys_for(*action).join(", ");
        lines.push(Line::from(vec![
            Span::raw(format!("  {label:>label_w$} │ ")),
            Span::styled(keys, Style::default().add_modifier(Modifier::ITALIC)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw("  In the search prompt: Enter submits, Esc cancels."));

    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = centered_rect(60, height, area);
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.text))
        .block(Block::default().title("Help").borders(Borders::ALL).border_style(Style::default().fg(app.theme.border)));
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_brackets_current_page() {
        assert_eq!(pagination_line(Some(2)), " 1  [2]  3 ");
        assert_eq!(pagination_line(None), " 1   2   3 ");
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect { x: 0, y: 0, width: 20, height: 10 };
        let r = centered_rect(40, 4, area);
        assert_eq!((r.x, r.y, r.width, r.height), (0, 3, 20, 4));
    }
}
