//! 表单状态管理
//!
//! 登录 / 注册 / 找回密码三个表单共用一份状态，字段顺序由表单类型决定

use std::collections::HashMap;

use crate::interfaces::tui::constants::MAX_FIELD_LENGTH;
use crate::utils::form_validator::{
    PasswordMatch, validate_email, validate_name, validate_password,
};

/// 表单类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    ForgotPassword,
}

impl FormKind {
    /// 表单包含的字段（按 Tab 顺序）
    pub fn fields(self) -> &'static [EditingField] {
        match self {
            Self::Login => &[EditingField::Email, EditingField::Password],
            Self::Register => &[
                EditingField::Name,
                EditingField::Email,
                EditingField::Password,
                EditingField::Confirm,
            ],
            Self::ForgotPassword => &[EditingField::Email],
        }
    }
}

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingField {
    Name,
    Email,
    Password,
    Confirm,
}

impl EditingField {
    /// 获取字段名称（用于验证错误的 key）
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Confirm => "Confirm Password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::Confirm)
    }
}

/// 表单状态
#[derive(Debug)]
pub struct FormState {
    pub kind: FormKind,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    /// 验证错误 (field_name -> error_message)
    pub validation_errors: HashMap<String, String>,
    /// 确认密码一致时的提示
    pub confirm_notice: Option<&'static str>,
    /// 当前编辑的字段
    pub currently_editing: Option<EditingField>,
    /// 请求进行中，禁止重复提交
    pub pending: bool,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            validation_errors: HashMap::new(),
            confirm_notice: None,
            currently_editing: kind.fields().first().copied(),
            pending: false,
        }
    }

    /// 切换表单类型并清空输入；邮箱保留，方便在表单间跳转
    ///
    /// `pending` 也保留：请求只在结果回传时解除，切换表单不能绕过
    pub fn reset(&mut self, kind: FormKind) {
        let email = std::mem::take(&mut self.email);
        let pending = self.pending;
        *self = Self::new(kind);
        self.email = email;
        self.pending = pending;
    }

    /// 切换到下一个编辑字段
    pub fn toggle_field(&mut self) {
        let fields = self.kind.fields();
        let next = match self.currently_editing {
            Some(current) => {
                let idx = fields.iter().position(|f| *f == current).unwrap_or(0);
                fields[(idx + 1) % fields.len()]
            }
            None => fields[0],
        };
        self.currently_editing = Some(next);
    }

    /// 获取字段的输入
    pub fn value(&self, field: EditingField) -> &str {
        match field {
            EditingField::Name => &self.name,
            EditingField::Email => &self.email,
            EditingField::Password => &self.password,
            EditingField::Confirm => &self.confirm,
        }
    }

    /// 获取当前编辑字段的输入可变引用
    fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(EditingField::Name) => Some(&mut self.name),
            Some(EditingField::Email) => Some(&mut self.email),
            Some(EditingField::Password) => Some(&mut self.password),
            Some(EditingField::Confirm) => Some(&mut self.confirm),
            None => None,
        }
    }

    /// 向当前编辑字段添加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut()
            && input.chars().count() < MAX_FIELD_LENGTH
        {
            input.push(c);
        }
    }

    /// 从当前编辑字段删除最后一个字符
    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
    }

    /// 获取指定字段的验证错误
    pub fn get_error(&self, field: EditingField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    /// 设置验证错误
    pub fn set_error(&mut self, field: EditingField, error: impl Into<String>) {
        self.validation_errors
            .insert(field.field_name().to_string(), error.into());
    }

    pub fn clear_error(&mut self, field: EditingField) {
        self.validation_errors.remove(field.field_name());
    }

    /// 检查是否有验证错误
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// 实时校验当前字段（仅注册表单）
    pub fn validate_current(&mut self) {
        if self.kind != FormKind::Register {
            return;
        }
        if let Some(field) = self.currently_editing {
            self.validate_field(field);
        }
    }

    fn validate_field(&mut self, field: EditingField) {
        let result = match field {
            EditingField::Name => validate_name(&self.name),
            EditingField::Email => validate_email(&self.email),
            EditingField::Password => validate_password(&self.password),
            EditingField::Confirm => {
                let matched = PasswordMatch::check(&self.password, &self.confirm);
                self.confirm_notice =
                    (matched == PasswordMatch::Matches && !self.confirm.is_empty())
                        .then(|| matched.message());
                match matched {
                    PasswordMatch::Matches => Ok(()),
                    PasswordMatch::Mismatch => Err(matched.message()),
                }
            }
        };
        match result {
            Ok(()) => self.clear_error(field),
            Err(msg) => self.set_error(field, msg),
        }
    }

    /// 提交前校验整张表单，返回是否通过
    pub fn validate_all(&mut self) -> bool {
        self.validation_errors.clear();
        match self.kind {
            FormKind::Register => {
                for field in self.kind.fields() {
                    self.validate_field(*field);
                }
            }
            FormKind::Login => {
                if self.email.trim().is_empty() {
                    self.set_error(EditingField::Email, "Email is required");
                }
                if self.password.is_empty() {
                    self.set_error(EditingField::Password, "Password is required");
                }
            }
            FormKind::ForgotPassword => self.validate_field(EditingField::Email),
        }
        !self.has_errors()
    }
}
