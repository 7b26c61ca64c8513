//! Form domain layer
//!
//! Field descriptors, validation rules, the country/city catalog and the
//! registration form controller that ties them together. Parts of the
//! controller API (string-keyed updates, error map inspection) are only
//! reached from tests, not from the TUI itself.

#![allow(dead_code)]

mod catalog;
mod field;
mod form_state;
mod record;
mod validation;

pub use field::{FieldKind, FieldName, FormField, REGISTRATION_FIELDS};
pub use form_state::{Form, RegistrationForm};
#[cfg(test)]
pub use form_state::SUBMIT_ROW;
pub use record::FormRecord;
