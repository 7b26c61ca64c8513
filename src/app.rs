//! Application state and core logic

use crate::clipboard::{ClipboardProvider, SystemClipboard};
use crate::config::TuiConfig;
use crate::state::{AppState, Form, RegistrationForm, Submission, View};
use crate::ui::render_record;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Clipboard used by the result view's copy action
    clipboard: Box<dyn ClipboardProvider>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(config: &TuiConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let form = RegistrationForm::with_options(
            config.show_password(),
            config.reset_city_on_country_change(),
        );
        Self {
            state: AppState::new(form),
            clipboard,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Result => self.handle_result_key(key),
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = ?self.state.current_view, to = ?view, "navigate");
        self.state.current_view = view;
    }

    /// Handle keys in the registration form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.form;
        let on_submit_row = form.is_submit_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.cycle_option(false),
            KeyCode::Right => form.cycle_option(true),
            KeyCode::Char('s') if ctrl => {
                self.submit_form();
            }
            KeyCode::Char('t') if ctrl => form.toggle_password_visibility(),
            KeyCode::Enter if on_submit_row => {
                self.submit_form();
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if !ctrl => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                form.input_char(ch);
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the form; on success hand the record to the result view.
    ///
    /// Returns whether the view changed.
    pub fn submit_form(&mut self) -> bool {
        let Some(record) = self.state.form.submit() else {
            return false;
        };
        tracing::info!("registration submitted");
        self.state.submission = Some(Submission::new(record));
        self.state.reset_form();
        self.navigate(View::Result);
        true
    }

    /// Handle keys in the result view
    fn handle_result_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => self.back_to_form(),
            KeyCode::Char('y') => self.copy_submission(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Leave the result view for a fresh, empty form
    pub fn back_to_form(&mut self) {
        self.state.submission = None;
        self.state.reset_form();
        self.navigate(View::Form);
    }

    /// Copy the submitted record as JSON
    fn copy_submission(&mut self) {
        let Some(submission) = &self.state.submission else {
            return;
        };
        let text = render_record(&submission.record);
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.state.status_message = Some(format!("Copied {} chars", text.chars().count()));
            }
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.state.status_message = Some(format!("Copy failed: {err}"));
            }
        }
    }
}
