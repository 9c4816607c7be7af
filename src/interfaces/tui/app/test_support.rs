//! 测试用的 App 构造与事件泵

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::state::{App, AppEvent};
use crate::clipboard::ClipboardSink;
use crate::config::UiConfig;
use crate::errors::{Result, ScissorsError};
use crate::runtime::lifetime::StartupContext;
use crate::services::{AuthError, AuthUser, IdentityProvider, ShorteningService};

pub(crate) struct StubShortener;

#[async_trait]
impl ShorteningService for StubShortener {
    async fn create(&self, long_url: &str) -> std::result::Result<String, ScissorsError> {
        if long_url.contains("fail") {
            Err(ScissorsError::create_failed("HTTP 500"))
        } else {
            Ok("https://tinyurl.com/abc".to_string())
        }
    }

    fn name(&self) -> &'static str {
        "Stub"
    }
}

pub(crate) struct StubIdentity;

fn user(email: &str) -> AuthUser {
    AuthUser {
        uid: "uid-1".to_string(),
        email: email.to_string(),
        id_token: "token".to_string(),
        refresh_token: "refresh".to_string(),
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<AuthUser, AuthError> {
        if password == "secret1" {
            Ok(user(email))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_up(&self, email: &str, _password: &str) -> std::result::Result<AuthUser, AuthError> {
        if email == "taken@example.com" {
            Err(AuthError::EmailInUse)
        } else {
            Ok(user(email))
        }
    }

    async fn send_password_reset(&self, email: &str) -> std::result::Result<(), AuthError> {
        if email.starts_with("unknown") {
            Err(AuthError::Provider("EMAIL_NOT_FOUND".to_string()))
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "Stub"
    }
}

#[derive(Default)]
pub(crate) struct MemoryClipboard;

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

pub(crate) struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(ScissorsError::clipboard("no display"))
    }
}

/// App wired to stub services; the initial auth notification is already consumed
pub(crate) fn test_app() -> (App, UnboundedReceiver<AppEvent>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let context = StartupContext::new(Arc::new(StubShortener), Arc::new(StubIdentity));
    let mut app = App::new(context, &UiConfig::default(), tx);
    app.clipboard = Box::new(MemoryClipboard);
    while let Ok(event) = rx.try_recv() {
        app.handle_app_event(event);
    }
    (app, rx)
}

pub(crate) async fn recv_event(rx: &mut UnboundedReceiver<AppEvent>) -> AppEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for app event")
        .expect("event channel closed")
}

/// Feed events into the app until `done` holds
pub(crate) async fn pump_until<F>(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>, done: F)
where
    F: Fn(&App) -> bool,
{
    while !done(app) {
        let event = recv_event(rx).await;
        app.handle_app_event(event);
    }
}
