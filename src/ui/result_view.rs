//! Read-only display of a submitted registration

use crate::app::App;
use crate::state::{FormRecord, Submission};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Pretty-printed JSON of a record, keys in form order
pub fn render_record(record: &FormRecord) -> String {
    serde_json::to_string_pretty(record)
        .unwrap_or_else(|err| format!("<unable to render record: {err}>"))
}

/// Draw the result view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submission Successful ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(submission) = &app.state.submission else {
        let empty = Paragraph::new("Nothing has been submitted.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Min(3),                // Record
            Constraint::Length(BUTTON_HEIGHT), // Back button
        ])
        .split(inner);

    frame.render_widget(header(submission), chunks[0]);

    let record = Paragraph::new(render_record(&submission.record))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Record ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(record, chunks[1]);

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(chunks[2])[0];
    render_button(frame, button_area, "Back to Form", true, true);
}

fn header(submission: &Submission) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            "Submitted at ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            submission
                .submitted_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
}
