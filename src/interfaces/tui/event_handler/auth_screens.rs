//! Event handlers for account screens
//!
//! Handles: Login, Register, ForgotPassword

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, FormKind};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle input on any of the account forms
pub fn handle_form_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.back_to_landing(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => handle_tab_navigation(app),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::F(2) => app.open_form(FormKind::Login),
        KeyCode::F(3) => app.open_form(FormKind::Register),
        KeyCode::F(4) => app.open_form(FormKind::ForgotPassword),
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    Ok(false)
}
