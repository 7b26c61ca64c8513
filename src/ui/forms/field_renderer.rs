//! Field rendering utilities for forms

use crate::platform::TOGGLE_PASSWORD_SHORTCUT;
use crate::state::{FieldKind, FieldName, FormField, RegistrationForm};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one field: top border with label, value, bottom border with error
pub const FIELD_HEIGHT: u16 = 3;

const MASK_CHAR: char = '•';

/// Text shown inside a field box, without cursor or styling
pub fn display_value(field: &FormField, form: &RegistrationForm) -> String {
    let value = form.value(field.name);
    match field.kind {
        FieldKind::Password if !form.show_password => {
            MASK_CHAR.to_string().repeat(value.chars().count())
        }
        _ => value.to_string(),
    }
}

fn field_title(field: &FormField, form: &RegistrationForm) -> String {
    match field.kind {
        FieldKind::Password => {
            let action = if form.show_password { "Hide" } else { "Show" };
            format!(" {} [{TOGGLE_PASSWORD_SHORTCUT}: {action}] ", field.label)
        }
        _ => format!(" {} ", field.label),
    }
}

/// Draw a form field with its inline error message
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    form: &RegistrationForm,
    is_active: bool,
) {
    let error = form.error(field.name);
    let value = display_value(field, form);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if !error.is_empty() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = Vec::new();
    if field.is_select() && is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }

    if value.is_empty() {
        spans.push(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value, value_style));
    }

    if field.name == FieldName::City && form.has_stale_city() {
        spans.push(Span::styled(
            " (not offered for this country)",
            Style::default().fg(Color::Yellow),
        ));
    }

    if field.is_select() {
        if is_active {
            spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        }
    } else if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .title(field_title(field, form))
        .borders(Borders::ALL)
        .border_style(border_style);

    if !error.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_masked_by_default() {
        let mut form = RegistrationForm::new();
        form.update_field(FieldName::Password, "secret1");
        let field = FormField::for_name(FieldName::Password);
        assert_eq!(display_value(field, &form), "•••••••");
    }

    #[test]
    fn test_password_shown_when_toggled() {
        let mut form = RegistrationForm::new();
        form.update_field(FieldName::Password, "secret1");
        form.toggle_password_visibility();
        let field = FormField::for_name(FieldName::Password);
        assert_eq!(display_value(field, &form), "secret1");
    }

    #[test]
    fn test_other_fields_shown_verbatim() {
        let mut form = RegistrationForm::new();
        form.update_field(FieldName::Email, "a@b.co");
        let field = FormField::for_name(FieldName::Email);
        assert_eq!(display_value(field, &form), "a@b.co");
    }

    #[test]
    fn test_password_title_names_toggle() {
        let mut form = RegistrationForm::new();
        let field = FormField::for_name(FieldName::Password);
        assert_eq!(field_title(field, &form), " Password [Ctrl+T: Show] ");
        form.toggle_password_visibility();
        assert_eq!(field_title(field, &form), " Password [Ctrl+T: Hide] ");
    }
}
