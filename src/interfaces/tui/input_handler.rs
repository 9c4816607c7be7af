//! Input handling utilities
//!
//! Unified text input for the account forms

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if app.form.pending {
        return;
    }
    app.form.push_char(c);
    // Trigger real-time validation
    app.form.validate_current();
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    if app.form.pending {
        return;
    }
    app.form.pop_char();
    app.form.validate_current();
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App) {
    app.form.toggle_field();
}
