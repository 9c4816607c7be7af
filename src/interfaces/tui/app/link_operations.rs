//! Short link operations: create, copy, remove

use tracing::{debug, warn};

use super::state::{App, AppEvent, CurrentScreen};
use crate::clipboard::COPY_FAILED_MESSAGE;
use crate::errors::ScissorsError;
use crate::interfaces::tui::constants::MAX_URL_LENGTH;
use crate::qr::render_qr;
use crate::session::SessionStatus;
use crate::utils::normalize_long_url;

impl App {
    pub fn push_url_char(&mut self, c: char) {
        if self.url_input.chars().count() < MAX_URL_LENGTH {
            self.url_input.push(c);
            self.refresh_url_hint();
        }
    }

    pub fn pop_url_char(&mut self) {
        self.url_input.pop();
        self.refresh_url_hint();
    }

    pub fn clear_url_input(&mut self) {
        self.url_input.clear();
        self.url_hint = None;
    }

    /// 输入时给出提示，空输入不提示
    fn refresh_url_hint(&mut self) {
        self.url_hint = if self.url_input.trim().is_empty() {
            None
        } else {
            normalize_long_url(&self.url_input).err().map(|e| e.to_string())
        };
    }

    /// Idle → Pending, running the create request on a background task
    pub fn submit_link(&mut self) {
        if self.controller.status() != SessionStatus::Idle {
            return;
        }

        let long_url = if self.url_input.trim().is_empty() {
            // 交给控制器记录空输入错误
            String::new()
        } else {
            match normalize_long_url(&self.url_input) {
                Ok(url) => url,
                Err(e) => {
                    self.url_hint = Some(e.to_string());
                    self.set_error(e.to_string());
                    return;
                }
            }
        };

        match self.controller.begin_submit(&long_url) {
            Ok(request) => {
                self.clear_messages();
                self.copy_indicator.reset();
                let tx = self.events.clone();
                tokio::spawn(async move {
                    let result = request.run().await;
                    if tx.send(AppEvent::ShortenDone(result)).is_err() {
                        debug!("Create finished after the TUI closed");
                    }
                });
            }
            Err(_) => {
                if let Some(err) = self.controller.session().last_error() {
                    let err = err.to_string();
                    self.set_error(err);
                }
            }
        }
    }

    pub(super) fn on_shorten_done(&mut self, result: Result<String, ScissorsError>) {
        self.controller.complete_submit(result);

        let session = self.controller.session();
        match (session.status(), session.short_url()) {
            (SessionStatus::Ready, Some(short_url)) => {
                let short_url = short_url.to_string();
                self.qr_code = if self.show_qr {
                    render_qr(&short_url)
                        .inspect_err(|e| warn!("QR rendering failed: {}", e))
                        .ok()
                } else {
                    None
                };
                self.clear_url_input();
                self.set_status(format!("Short URL created: {}", short_url));
            }
            _ => {
                if let Some(err) = session.last_error() {
                    let err = err.to_string();
                    self.set_error(err);
                }
            }
        }
    }

    pub fn copy_short_link(&mut self) {
        let Some(short_url) = self.controller.session().short_url().map(str::to_string) else {
            return;
        };
        match self.copy_indicator.copy(self.clipboard.as_mut(), &short_url) {
            Ok(()) => self.set_status("Copied!"),
            Err(_) => self.set_error(COPY_FAILED_MESSAGE),
        }
    }

    /// Ready → ConfirmingDelete and show the confirmation popup
    pub fn request_link_removal(&mut self) {
        if self.controller.request_removal().is_applied() {
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub fn confirm_link_removal(&mut self) {
        if self.controller.confirm_removal().is_applied() {
            self.qr_code = None;
            self.copy_indicator.reset();
            self.clear_url_input();
            self.set_status("Short URL removed");
        }
        self.back_to_landing();
    }

    pub fn cancel_link_removal(&mut self) {
        self.controller.cancel_removal();
        self.back_to_landing();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{recv_event, test_app};
    use super::*;
    use crate::session::{BLANK_URL_MESSAGE, CREATE_FAILED_MESSAGE};

    #[tokio::test]
    async fn test_submit_renders_pending_then_ready() {
        let (mut app, mut rx) = test_app();
        for c in "example.com".chars() {
            app.push_url_char(c);
        }
        assert!(app.url_hint.is_none());

        app.submit_link();
        assert_eq!(app.controller.status(), SessionStatus::Pending);

        // Pending 时再次提交不会发出第二个请求
        app.submit_link();

        let event = recv_event(&mut rx).await;
        app.handle_app_event(event);

        assert_eq!(app.controller.status(), SessionStatus::Ready);
        assert_eq!(
            app.controller.session().short_url(),
            Some("https://tinyurl.com/abc")
        );
        assert_eq!(app.controller.session().long_url(), "https://example.com");
        assert!(app.qr_code.is_some());
        assert!(app.url_input.is_empty());
    }

    #[tokio::test]
    async fn test_failed_create_shows_generic_error() {
        let (mut app, mut rx) = test_app();
        app.url_input = "https://fail.example.com".to_string();
        app.submit_link();

        let event = recv_event(&mut rx).await;
        app.handle_app_event(event);

        assert_eq!(app.controller.status(), SessionStatus::Idle);
        assert_eq!(app.error_message, CREATE_FAILED_MESSAGE);
        assert!(app.qr_code.is_none());
    }

    #[tokio::test]
    async fn test_blank_and_dangerous_input() {
        let (mut app, _rx) = test_app();
        app.submit_link();
        assert_eq!(app.controller.status(), SessionStatus::Idle);
        assert_eq!(app.error_message, BLANK_URL_MESSAGE);

        for c in "javascript:alert(1)".chars() {
            app.push_url_char(c);
        }
        assert!(app.url_hint.is_some());
        app.submit_link();
        assert_eq!(app.controller.status(), SessionStatus::Idle);
        assert!(app.error_message.contains("not allowed"));
    }

    #[tokio::test]
    async fn test_copy_and_remove_flow() {
        let (mut app, mut rx) = test_app();
        app.url_input = "example.com".to_string();
        app.submit_link();
        let event = recv_event(&mut rx).await;
        app.handle_app_event(event);

        app.copy_short_link();
        assert!(app.copy_indicator.is_copied());
        assert_eq!(app.status_message, "Copied!");

        app.request_link_removal();
        assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
        assert_eq!(app.controller.status(), SessionStatus::ConfirmingDelete);

        app.cancel_link_removal();
        assert_eq!(app.current_screen, CurrentScreen::Landing);
        assert_eq!(app.controller.status(), SessionStatus::Ready);

        app.request_link_removal();
        app.confirm_link_removal();
        assert_eq!(app.controller.status(), SessionStatus::Idle);
        assert!(app.controller.session().short_url().is_none());
        assert!(app.qr_code.is_none());
        assert!(!app.copy_indicator.is_copied());
    }

    #[tokio::test]
    async fn test_copy_failure_message() {
        let (mut app, mut rx) = test_app();
        app.clipboard = Box::new(super::super::test_support::BrokenClipboard);
        app.url_input = "example.com".to_string();
        app.submit_link();
        let event = recv_event(&mut rx).await;
        app.handle_app_event(event);

        app.copy_short_link();
        assert_eq!(app.error_message, COPY_FAILED_MESSAGE);
        assert_eq!(app.copy_indicator.error(), Some(COPY_FAILED_MESSAGE));
    }
}
