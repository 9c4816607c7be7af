//! Identity provider abstraction

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ScissorsError;

/// A signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// Errors reported by an identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    EmailInUse,
    InvalidEmail,
    InvalidCredentials,
    WeakPassword(String),
    TooManyAttempts,
    Network(String),
    Provider(String),
}

impl AuthError {
    /// Whether the error belongs on the email field of a form
    pub fn is_email_error(&self) -> bool {
        matches!(self, Self::EmailInUse | Self::InvalidEmail)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmailInUse => write!(f, "The email address is already in use"),
            Self::InvalidEmail => write!(f, "The email address is badly formatted"),
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::WeakPassword(msg) => write!(f, "Weak password: {}", msg),
            Self::TooManyAttempts => {
                write!(f, "Too many unsuccessful attempts, please try again later")
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Provider(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for ScissorsError {
    fn from(err: AuthError) -> Self {
        ScissorsError::auth(err.to_string())
    }
}

/// Sign-in, registration and password reset against a third-party service
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Revoke the session at the provider. Token-based providers have
    /// nothing to revoke, so the default is a no-op.
    async fn sign_out(&self, _user: &AuthUser) -> Result<(), AuthError> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}
