//! Form rendering module
//!
//! - `field_renderer`: single field box with inline error
//! - `registration_form`: the two-column registration form

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
