//! Account operations: login, registration, password reset, logout

use tracing::{debug, warn};

use super::state::{App, AppEvent, EditingField, FormKind};
use crate::services::{AuthError, AuthUser};
use crate::utils::form_validator::{
    FieldError, LOGIN_SUCCESS, REGISTER_SUCCESS, RESET_FAILURE, RESET_SUCCESS,
    sign_up_error_field,
};

impl App {
    /// 校验并提交当前表单；请求进行中时忽略
    pub fn submit_form(&mut self) {
        if self.form.pending {
            return;
        }
        if !self.form.validate_all() {
            self.set_error("Please fix the highlighted fields");
            return;
        }

        self.form.pending = true;
        self.clear_messages();

        let auth = self.context.auth.clone();
        let tx = self.events.clone();
        let email = self.form.email.trim().to_string();
        let password = self.form.password.clone();

        let kind = self.form.kind;
        tokio::spawn(async move {
            let event = match kind {
                FormKind::Login => AppEvent::SignedIn(auth.sign_in(&email, &password).await),
                FormKind::Register => AppEvent::Registered(auth.sign_up(&email, &password).await),
                FormKind::ForgotPassword => {
                    AppEvent::ResetSent(auth.send_password_reset(&email).await)
                }
            };
            if tx.send(event).is_err() {
                debug!("Auth request finished after the TUI closed");
            }
        });
    }

    // 结果回来时用户可能已离开原表单：只更新提示，不动表单和页面

    pub(super) fn on_signed_in(&mut self, result: Result<AuthUser, AuthError>) {
        self.form.pending = false;
        let on_form = self.is_showing_form(FormKind::Login);
        match result {
            Ok(_) => {
                self.set_status(LOGIN_SUCCESS);
                if on_form {
                    self.form.reset(FormKind::Login);
                    self.back_to_landing();
                }
            }
            Err(e) => {
                let msg = e.to_string();
                if on_form {
                    self.form.set_error(EditingField::Password, msg.clone());
                }
                self.set_error(msg);
            }
        }
    }

    pub(super) fn on_registered(&mut self, result: Result<AuthUser, AuthError>) {
        self.form.pending = false;
        let on_form = self.is_showing_form(FormKind::Register);
        match result {
            Ok(_) => {
                if on_form {
                    self.open_form(FormKind::Login);
                }
                self.set_status(REGISTER_SUCCESS);
            }
            Err(e) => {
                let (field, msg) = match sign_up_error_field(&e) {
                    FieldError::Email(msg) => (EditingField::Email, msg),
                    FieldError::Password(msg) => (EditingField::Password, msg),
                };
                if on_form {
                    self.form.set_error(field, msg.clone());
                }
                self.set_error(msg);
            }
        }
    }

    pub(super) fn on_reset_sent(&mut self, result: Result<(), AuthError>) {
        self.form.pending = false;
        match result {
            Ok(()) => {
                if self.is_showing_form(FormKind::ForgotPassword) {
                    self.open_form(FormKind::Login);
                }
                self.set_status(RESET_SUCCESS);
            }
            Err(e) => {
                warn!("Password reset failed: {}", e);
                self.set_error(RESET_FAILURE);
            }
        }
    }

    /// 退出登录；状态变化通过订阅回传
    pub fn logout(&mut self) {
        if self.signed_in_user().is_none() {
            return;
        }
        let auth = self.context.auth.clone();
        tokio::spawn(async move { auth.sign_out().await });
        self.set_status("Signed out");
    }
}
