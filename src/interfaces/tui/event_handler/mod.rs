//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - link_screens: Landing, DeleteConfirm
//! - auth_screens: Login, Register, ForgotPassword
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod auth_screens;
mod link_screens;
mod misc_screens;

use auth_screens::*;
use link_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns `true` when the application should exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match app.current_screen {
        CurrentScreen::Landing => handle_landing_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Login | CurrentScreen::Register | CurrentScreen::ForgotPassword => {
            handle_form_screen(app, key_code)
        }
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::interfaces::tui::app::test_support::{pump_until, test_app};
    use crate::interfaces::tui::app::{AppEvent, FormKind};
    use crate::session::SessionStatus;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key_event(app, KeyCode::Char(c)).unwrap();
        }
    }

    #[tokio::test]
    async fn test_shorten_copy_remove_by_keys() {
        let (mut app, mut rx) = test_app();
        type_text(&mut app, "example.com/page");
        assert!(!handle_key_event(&mut app, KeyCode::Enter).unwrap());
        assert_eq!(app.controller.status(), SessionStatus::Pending);

        pump_until(&mut app, &mut rx, |a| {
            a.controller.status() == SessionStatus::Ready
        })
        .await;

        handle_key_event(&mut app, KeyCode::Char('c')).unwrap();
        assert!(app.copy_indicator.is_copied());

        handle_key_event(&mut app, KeyCode::Char('d')).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
        handle_key_event(&mut app, KeyCode::Char('n')).unwrap();
        assert_eq!(app.controller.status(), SessionStatus::Ready);

        handle_key_event(&mut app, KeyCode::Delete).unwrap();
        handle_key_event(&mut app, KeyCode::Char('y')).unwrap();
        assert_eq!(app.controller.status(), SessionStatus::Idle);
        assert_eq!(app.current_screen, CurrentScreen::Landing);
    }

    #[tokio::test]
    async fn test_escape_clears_then_asks_to_exit() {
        let (mut app, _rx) = test_app();
        type_text(&mut app, "abc");
        handle_key_event(&mut app, KeyCode::Esc).unwrap();
        assert!(app.url_input.is_empty());
        assert_eq!(app.current_screen, CurrentScreen::Landing);

        handle_key_event(&mut app, KeyCode::Esc).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
        assert!(!handle_key_event(&mut app, KeyCode::Char('n')).unwrap());
        assert_eq!(app.current_screen, CurrentScreen::Landing);

        handle_key_event(&mut app, KeyCode::Esc).unwrap();
        assert!(handle_key_event(&mut app, KeyCode::Char('y')).unwrap());
    }

    #[tokio::test]
    async fn test_letters_go_to_url_input_while_idle() {
        let (mut app, _rx) = test_app();
        // 空闲时 q/c/d 都是普通字符
        type_text(&mut app, "qcd");
        assert_eq!(app.url_input, "qcd");
        assert_eq!(app.current_screen, CurrentScreen::Landing);
    }

    #[tokio::test]
    async fn test_form_navigation_keys() {
        let (mut app, _rx) = test_app();
        handle_key_event(&mut app, KeyCode::F(2)).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::Login);

        type_text(&mut app, "ada@example.com");
        handle_key_event(&mut app, KeyCode::Tab).unwrap();
        type_text(&mut app, "pw");
        assert_eq!(app.form.email, "ada@example.com");
        assert_eq!(app.form.password, "pw");

        handle_key_event(&mut app, KeyCode::F(4)).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::ForgotPassword);
        assert_eq!(app.form.kind, FormKind::ForgotPassword);
        assert_eq!(app.form.email, "ada@example.com");
        assert!(app.form.password.is_empty());

        handle_key_event(&mut app, KeyCode::Esc).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::Landing);
    }

    #[tokio::test]
    async fn test_help_opens_and_closes() {
        let (mut app, _rx) = test_app();
        handle_key_event(&mut app, KeyCode::F(1)).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::Help);
        handle_key_event(&mut app, KeyCode::Char('q')).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::Landing);
    }

    #[tokio::test]
    async fn test_resubmit_after_switching_forms_sends_one_login() {
        let (mut app, mut rx) = test_app();
        handle_key_event(&mut app, KeyCode::F(2)).unwrap();
        type_text(&mut app, "ada@example.com");
        handle_key_event(&mut app, KeyCode::Tab).unwrap();
        type_text(&mut app, "secret1");
        handle_key_event(&mut app, KeyCode::Enter).unwrap();
        assert!(app.form.pending);

        // 重新打开登录表单并再次提交，请求仍在进行中
        handle_key_event(&mut app, KeyCode::F(2)).unwrap();
        assert!(app.form.pending);
        handle_key_event(&mut app, KeyCode::Tab).unwrap();
        type_text(&mut app, "secret1");
        handle_key_event(&mut app, KeyCode::Enter).unwrap();

        let mut sign_ins = 0;
        let quiet = Duration::from_millis(300);
        while let Ok(Some(event)) = tokio::time::timeout(quiet, rx.recv()).await {
            if matches!(event, AppEvent::SignedIn(_)) {
                sign_ins += 1;
            }
            app.handle_app_event(event);
        }

        assert_eq!(sign_ins, 1);
        assert!(!app.form.pending);
        assert!(app.signed_in_user().is_some());
    }
}
