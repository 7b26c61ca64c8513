//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_view;

pub use result_view::render_record;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Form => forms::draw_registration_form(frame, main_area, app),
        View::Result => result_view::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardProvider;
    use crate::config::TuiConfig;
    use crate::state::{FieldName, View};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::with_clipboard(
            &TuiConfig::default(),
            Box::new(MockClipboardProvider::new()),
        )
    }

    fn render(app: &App) -> String {
        render_sized(app, 100, 24)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_form_view_shows_labels_and_placeholders() {
        let text = render(&test_app());
        assert!(text.contains("Registration Form"));
        assert!(text.contains("First Name"));
        assert!(text.contains("Aadhar Number"));
        assert!(text.contains("Select Country"));
        assert!(text.contains("+91XXXXXXXXXX"));
        assert!(text.contains("Submit"));
        assert!(text.contains("submit:disabled"));
    }

    #[test]
    fn test_form_view_shows_inline_error() {
        let mut app = test_app();
        app.state.form.update_field(FieldName::Email, "abc");
        let text = render(&app);
        assert!(text.contains("Invalid email"));
    }

    #[test]
    fn test_form_view_masks_password() {
        let mut app = test_app();
        app.state.form.update_field(FieldName::Password, "hunter22");
        let text = render(&app);
        assert!(!text.contains("hunter22"));
        assert!(text.contains("••••••••"));
    }

    #[test]
    fn test_form_view_shows_stale_city() {
        let mut app = test_app();
        app.state.form.update_field(FieldName::Country, "USA");
        app.state.form.update_field(FieldName::City, "Chicago");
        app.state.form.update_field(FieldName::Country, "UK");
        let text = render(&app);
        assert!(text.contains("Chicago"));
        assert!(text.contains("not offered"));
    }

    #[test]
    fn test_status_bar_shows_message() {
        let mut app = test_app();
        app.state.status_message = Some("Copied 3 chars".to_string());
        assert!(render(&app).contains("Copied 3 chars"));
    }

    #[test]
    fn test_form_hints_fit_eighty_columns() {
        let text = render_sized(&test_app(), 80, 24);
        let status_line = text.lines().last().unwrap();
        assert!(status_line.contains("submit:disabled"));
        assert!(status_line.contains("Esc:quit"));
    }

    #[test]
    fn test_copy_message_and_hints_fit_eighty_columns() {
        let mut app = test_app();
        app.state.current_view = View::Result;
        app.state.status_message = Some("Copied 412 chars".to_string());
        let text = render_sized(&app, 80, 24);
        let status_line = text.lines().last().unwrap();
        assert!(status_line.contains("Copied 412 chars"));
        assert!(status_line.contains("q:quit"));
    }
}
