//! Layout components (content area and status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    // Status message goes before the hints so it is never cut off
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
        spans.push(Span::raw(" |"));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Form => {
            let submit = if app.state.form.is_submittable() {
                format!("{SUBMIT_SHORTCUT}:submit")
            } else {
                "submit:disabled".to_string()
            };
            format!("Tab:next  ←→:choose  {TOGGLE_PASSWORD_SHORTCUT}:pw  {submit}  Esc:quit")
        }
        View::Result => format!("Enter/b:back to form  {COPY_SHORTCUT}:copy  q:quit"),
    }
}
