//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，表单状态拆分在子模块中

mod form_state;

pub use form_state::{EditingField, FormKind, FormState};

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::clipboard::{ClipboardSink, CopyIndicator, SystemClipboard};
use crate::config::UiConfig;
use crate::errors::ScissorsError;
use crate::runtime::lifetime::StartupContext;
use crate::services::{AuthError, AuthState, AuthUser, Subscription};
use crate::session::LinkLifecycleController;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Landing,
    DeleteConfirm,
    Login,
    Register,
    ForgotPassword,
    Help,
    Exiting,
}

impl From<FormKind> for CurrentScreen {
    fn from(kind: FormKind) -> Self {
        match kind {
            FormKind::Login => Self::Login,
            FormKind::Register => Self::Register,
            FormKind::ForgotPassword => Self::ForgotPassword,
        }
    }
}

/// 异步任务完成后回传给事件循环的消息
#[derive(Debug)]
pub enum AppEvent {
    ShortenDone(Result<String, ScissorsError>),
    SignedIn(Result<AuthUser, AuthError>),
    Registered(Result<AuthUser, AuthError>),
    ResetSent(Result<(), AuthError>),
    AuthChanged(AuthState),
}

pub struct App {
    pub context: StartupContext,
    pub controller: LinkLifecycleController,
    pub current_screen: CurrentScreen,

    // Landing form
    pub url_input: String,
    pub url_hint: Option<String>,

    // Short link widget
    pub qr_code: Option<String>,
    pub show_qr: bool,
    pub copy_indicator: CopyIndicator,
    pub clipboard: Box<dyn ClipboardSink + Send>,

    // Account forms
    pub form: FormState,
    pub auth_state: AuthState,

    // UI state
    pub status_message: String,
    pub error_message: String,
    pub spinner_tick: usize,

    pub(crate) events: UnboundedSender<AppEvent>,
    _subscription: Subscription,
}

impl App {
    pub fn new(context: StartupContext, ui: &UiConfig, events: UnboundedSender<AppEvent>) -> Self {
        let tx = events.clone();
        let subscription = context.auth.subscribe(move |state| {
            // 事件循环结束后发送失败可以忽略
            let _ = tx.send(AppEvent::AuthChanged(state.clone()));
        });
        let controller = LinkLifecycleController::new(context.shortener.clone());
        let auth_state = context.auth.state();

        App {
            context,
            controller,
            current_screen: CurrentScreen::Landing,
            url_input: String::new(),
            url_hint: None,
            qr_code: None,
            show_qr: ui.show_qr,
            copy_indicator: CopyIndicator::new(Duration::from_millis(ui.copied_indicator_ms)),
            clipboard: Box::new(SystemClipboard),
            form: FormState::new(FormKind::Login),
            auth_state,
            status_message: String::new(),
            error_message: String::new(),
            spinner_tick: 0,
            events,
            _subscription: subscription,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = msg.into();
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn signed_in_user(&self) -> Option<&AuthUser> {
        self.auth_state.user()
    }

    /// 切换到账户表单并重置表单内容
    pub fn open_form(&mut self, kind: FormKind) {
        self.form.reset(kind);
        self.current_screen = CurrentScreen::from(kind);
    }

    /// 当前是否停留在 `kind` 对应的表单上
    pub fn is_showing_form(&self, kind: FormKind) -> bool {
        self.form.kind == kind && self.current_screen == CurrentScreen::from(kind)
    }

    pub fn back_to_landing(&mut self) {
        self.current_screen = CurrentScreen::Landing;
    }

    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// Apply a message produced by a background task
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShortenDone(result) => self.on_shorten_done(result),
            AppEvent::SignedIn(result) => self.on_signed_in(result),
            AppEvent::Registered(result) => self.on_registered(result),
            AppEvent::ResetSent(result) => self.on_reset_sent(result),
            AppEvent::AuthChanged(state) => self.auth_state = state,
        }
    }
}
