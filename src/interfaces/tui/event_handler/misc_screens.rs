//! Event handlers for Help and Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.back_to_landing();
    }
    Ok(false)
}

/// Handle exit confirmation input
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.back_to_landing(),
        _ => {}
    }
    Ok(false)
}
