//! 注册 / 登录表单字段校验

use crate::services::AuthError;

pub const NAME_ERROR: &str = "Name cannot contain numbers or special characters";
pub const EMAIL_ERROR: &str = "Email must contain @ symbol";
pub const PASSWORD_ERROR: &str = "Password must be 6 or more characters and contain at least one number, one uppercase, and one lowercase letter.";
pub const PASSWORD_MATCH: &str = "Password Matches ✔";
pub const PASSWORD_MISMATCH: &str = "Password does not match ❌";
pub const EMAIL_IN_USE: &str = "Email is already in use";

pub const REGISTER_SUCCESS: &str = "Account Created Successfully!";
pub const LOGIN_SUCCESS: &str = "Login Successful!";
pub const RESET_SUCCESS: &str = "Password reset email sent successfully. Please check your email";
pub const RESET_FAILURE: &str = "Error sending password reset email";

const NAME_FORBIDDEN: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let invalid = name
        .chars()
        .any(|c| c.is_ascii_digit() || NAME_FORBIDDEN.contains(c));
    if invalid { Err(NAME_ERROR) } else { Ok(()) }
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(EMAIL_ERROR)
    }
}

/// 至少 6 位，且同时包含数字和 ASCII 字母
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let long_enough = password.chars().count() >= 6;
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    if long_enough && has_digit && has_letter {
        Ok(())
    } else {
        Err(PASSWORD_ERROR)
    }
}

/// 确认密码结果；匹配时的提示只是信息，不是错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    Matches,
    Mismatch,
}

impl PasswordMatch {
    pub fn check(password: &str, confirmation: &str) -> Self {
        if password == confirmation {
            Self::Matches
        } else {
            Self::Mismatch
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Matches => PASSWORD_MATCH,
            Self::Mismatch => PASSWORD_MISMATCH,
        }
    }
}

/// Per-field messages of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.confirm.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegistrationInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm: &'a str,
}

pub fn validate_registration(input: RegistrationInput<'_>) -> RegistrationErrors {
    RegistrationErrors {
        name: validate_name(input.name).err().map(str::to_string),
        email: validate_email(input.email).err().map(str::to_string),
        password: validate_password(input.password).err().map(str::to_string),
        confirm: match PasswordMatch::check(input.password, input.confirm) {
            PasswordMatch::Matches => None,
            PasswordMatch::Mismatch => Some(PASSWORD_MISMATCH.to_string()),
        },
    }
}

/// 注册失败时错误显示在哪个字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Email(String),
    Password(String),
}

pub fn sign_up_error_field(err: &AuthError) -> FieldError {
    if err.is_email_error() {
        FieldError::Email(EMAIL_IN_USE.to_string())
    } else {
        FieldError::Password(err.to_string())
    }
}
