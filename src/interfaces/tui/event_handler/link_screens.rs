//! Event handlers for link-related screens
//!
//! Handles: Landing, DeleteConfirm

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen, FormKind};
use crate::session::SessionStatus;

/// Navigation keys available on the landing screen in every state
fn handle_landing_navigation(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::F(1) => app.current_screen = CurrentScreen::Help,
        KeyCode::F(2) => {
            if app.signed_in_user().is_some() {
                app.logout();
            } else {
                app.open_form(FormKind::Login);
            }
        }
        KeyCode::F(3) => app.open_form(FormKind::Register),
        _ => return false,
    }
    true
}

/// Handle landing screen input
pub fn handle_landing_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if handle_landing_navigation(app, key_code) {
        return Ok(false);
    }

    match app.controller.status() {
        SessionStatus::Idle => match key_code {
            KeyCode::Enter => app.submit_link(),
            KeyCode::Backspace => app.pop_url_char(),
            KeyCode::Esc => {
                if app.url_input.is_empty() {
                    app.current_screen = CurrentScreen::Exiting;
                } else {
                    app.clear_url_input();
                }
            }
            KeyCode::Char(c) => app.push_url_char(c),
            _ => {}
        },
        SessionStatus::Pending => {
            if key_code == KeyCode::Esc {
                app.current_screen = CurrentScreen::Exiting;
            }
        }
        SessionStatus::Ready => match key_code {
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('y') => app.copy_short_link(),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('r') | KeyCode::Delete => {
                app.request_link_removal()
            }
            KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                app.current_screen = CurrentScreen::Exiting;
            }
            _ => {}
        },
        // 确认弹窗打开时不会停留在 Landing
        SessionStatus::ConfirmingDelete => app.current_screen = CurrentScreen::DeleteConfirm,
    }
    Ok(false)
}

/// Handle delete confirmation screen input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_link_removal(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_link_removal(),
        _ => {}
    }
    Ok(false)
}
