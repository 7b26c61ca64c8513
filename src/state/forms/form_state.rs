//! Registration form state and submission gating

use super::catalog::{cities_for, countries, offers_city};
use super::field::{FieldError, FieldName, FormField};
use super::record::{ErrorMap, FormRecord};
use super::validation::validate;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the Submit button row, after the last input
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

/// The registration form: authoritative field values plus their errors
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    record: FormRecord,
    errors: ErrorMap,
    pub active_field_index: usize,
    pub show_password: bool,
    /// Clear the city when the newly chosen country does not offer it
    pub reset_city_on_country_change: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(show_password: bool, reset_city_on_country_change: bool) -> Self {
        Self {
            show_password,
            reset_city_on_country_change,
            ..Self::default()
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.record.get(name)
    }

    pub fn error(&self, name: FieldName) -> &str {
        self.errors.message(name)
    }

    /// Store a new value for a field and revalidate that field
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        let value = value.into();
        let message = validate(name, &value);
        tracing::debug!(field = %name, valid = message.is_empty(), "field updated");

        self.record.set(name, value);
        self.errors.set(name, message);

        if name == FieldName::Country && self.reset_city_on_country_change {
            let city = self.record.get(FieldName::City);
            if !city.is_empty() && !offers_city(self.record.get(FieldName::Country), city) {
                tracing::debug!("city no longer offered, clearing it");
                self.record.set(FieldName::City, "");
                self.errors.clear(FieldName::City);
            }
        }
    }

    /// String-keyed variant of [`Self::update_field`]
    pub fn update_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let name: FieldName = name.parse()?;
        self.update_field(name, value);
        Ok(())
    }

    /// Whether the Submit action is currently allowed
    pub fn is_submittable(&self) -> bool {
        !self.record.has_empty() && !self.errors.has_errors()
    }

    /// Snapshot of the record if it may be submitted, otherwise `None`
    pub fn submit(&self) -> Option<FormRecord> {
        let has_errors = self.errors.has_errors();
        let has_empty = self.record.has_empty();
        if has_errors || has_empty {
            tracing::debug!(has_errors, has_empty, "submit rejected");
            return None;
        }
        Some(self.record.clone())
    }

    /// Field under the cursor, `None` on the Submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, c: char) {
        let Some(name) = self.active_text_field() else {
            return;
        };
        let mut value = self.value(name).to_string();
        value.push(c);
        self.update_field(name, value);
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self) {
        let Some(name) = self.active_text_field() else {
            return;
        };
        let mut value = self.value(name).to_string();
        value.pop();
        self.update_field(name, value);
    }

    fn active_text_field(&self) -> Option<FieldName> {
        self.active_field_name()
            .filter(|name| !FormField::for_name(*name).is_select())
    }

    /// Options a select field offers, given the current record
    pub fn options_for(&self, name: FieldName) -> Vec<&'static str> {
        match name {
            FieldName::Country => countries(),
            FieldName::City => cities_for(self.value(FieldName::Country)).to_vec(),
            _ => Vec::new(),
        }
    }

    /// Step the active select to its next (or previous) option.
    ///
    /// The empty placeholder sits before the first option. A value that is
    /// not in the current list (a stale city) steps onto the list's ends.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if !FormField::for_name(name).is_select() {
            return;
        }

        let options = self.options_for(name);
        if options.is_empty() {
            return;
        }

        // Slot 0 is the placeholder, slot i + 1 is options[i]
        let slots = options.len() + 1;
        let current = self.value(name);
        let position = if current.is_empty() {
            Some(0)
        } else {
            options.iter().position(|o| *o == current).map(|i| i + 1)
        };

        let next = match (position, forward) {
            (Some(p), true) => (p + 1) % slots,
            (Some(0), false) => slots - 1,
            (Some(p), false) => p - 1,
            (None, true) => 1,
            (None, false) => slots - 1,
        };

        let value = if next == 0 { "" } else { options[next - 1] };
        self.update_field(name, value);
    }

    /// True when the selected city is not among the country's options
    pub fn has_stale_city(&self) -> bool {
        let city = self.value(FieldName::City);
        !city.is_empty() && !offers_city(self.value(FieldName::Country), city)
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // inputs plus the Submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
