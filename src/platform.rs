//! Keyboard shortcut labels shown in help text

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility toggle shortcut display
pub const TOGGLE_PASSWORD_SHORTCUT: &str = "Ctrl+T";

/// Copy shortcut display on the result view
pub const COPY_SHORTCUT: &str = "y";
