//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FormField, REGISTRATION_FIELDS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields per column; the form is laid out in two columns
const ROWS_PER_COLUMN: usize = 5;

/// Draw the registration form with its Submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * ROWS_PER_COLUMN as u16), // Fields
            Constraint::Length(BUTTON_HEIGHT),                         // Submit
            Constraint::Min(0),                                        // Remaining space
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    for (column, fields) in REGISTRATION_FIELDS.chunks(ROWS_PER_COLUMN).enumerate() {
        draw_column(frame, columns[column], fields, app);
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[1])[0];

    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_row_active(),
        form.is_submittable(),
    );
}

fn draw_column(frame: &mut Frame, area: Rect, fields: &[FormField], app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); fields.len()])
        .split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let is_active = app.state.form.active_field_name() == Some(field.name);
        draw_field(frame, *row, field, &app.state.form, is_active);
    }
}
