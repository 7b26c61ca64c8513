//! Application state definitions

use super::forms::{FormRecord, RegistrationForm};
use chrono::{DateTime, Local};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Read-only display of the last submission
    Result,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Form => "Registration Form",
            Self::Result => "Submission Successful",
        }
    }
}

/// A record accepted by the form, handed to the result view
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: FormRecord,
    pub submitted_at: DateTime<Local>,
}

impl Submission {
    pub fn new(record: FormRecord) -> Self {
        Self {
            record,
            submitted_at: Local::now(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form session
    pub form: RegistrationForm,

    // Payload of the result view
    pub submission: Option<Submission>,

    // UI state
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Replace the form session with a fresh one, keeping its display options
    pub fn reset_form(&mut self) {
        let options = &self.form;
        self.form = RegistrationForm::with_options(
            options.show_password,
            options.reset_city_on_country_change,
        );
    }
}
