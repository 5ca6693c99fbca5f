//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::overlays::render_utils::{InputHint, hint_line};
use crate::pages::MenuItem;
use crate::state::{AppState, TuiState};

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Width of the page menu column.
const MENU_WIDTH: u16 = 34;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, state, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(10)])
        .split(rows[1]);

    render_menu(frame, state, columns[0]);
    render_activity(frame, state, columns[1]);
    render_status_line(frame, state, rows[2]);

    // Dialog goes last so it draws over everything else.
    app.dialog.surface().render(frame, area);
}

fn render_header(frame: &mut Frame, state: &TuiState, area: Rect) {
    let (status, color) = if state.offline {
        ("backend offline", Color::Red)
    } else {
        ("backend online", Color::Green)
    };
    let line = Line::from(vec![
        Span::styled(
            " Tutorly ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("• ", Style::default().fg(Color::DarkGray)),
        Span::styled(status, Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_menu(frame: &mut Frame, state: &TuiState, area: Rect) {
    let items: Vec<ListItem> = MenuItem::all()
        .iter()
        .map(|item| ListItem::new(item.label(state.offline)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Pages "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_activity(frame: &mut Frame, state: &TuiState, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = state.activity.len().saturating_sub(visible);
    let lines: Vec<Line> = state
        .activity
        .iter()
        .skip(skip)
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    let para = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Activity "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

fn render_status_line(frame: &mut Frame, state: &TuiState, area: Rect) {
    let line = if let Some(page) = state.running {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!(" {spinner} "), Style::default().fg(Color::Cyan)),
            Span::styled(page.label(), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "run"),
            InputHint::new("q", "quit"),
        ];
        hint_line(&hints, Color::Cyan)
    };
    frame.render_widget(Paragraph::new(line), area);
}
