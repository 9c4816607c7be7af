//! Firebase Auth 实现
//!
//! 使用 Identity Toolkit REST API：
//! - `accounts:signInWithPassword`
//! - `accounts:signUp`
//! - `accounts:sendOobCode` (requestType = PASSWORD_RESET)

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ureq::Agent;

use super::provider::{AuthError, AuthUser, IdentityProvider};
use crate::config::AuthConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest {
    email: String,
    password: String,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest {
    request_type: &'static str,
    email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Firebase Auth provider
#[derive(Clone)]
pub struct FirebaseIdentityProvider {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl FirebaseIdentityProvider {
    pub fn new(config: &AuthConfig) -> Self {
        if config.api_key.is_empty() {
            warn!("Auth: no Firebase API key configured");
        }
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, method, self.api_key)
    }

    /// 发送请求并解析响应（同步，在 spawn_blocking 中调用）
    fn post_sync<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let resp = self
            .agent
            .post(&self.endpoint(method))
            .send_json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = resp.status();
        let mut body = resp.into_body();
        if status.is_success() {
            return body
                .read_json::<T>()
                .map_err(|e| AuthError::Provider(format!("Invalid response: {}", e)));
        }

        let raw = body.read_to_string().unwrap_or_default();
        let err = match serde_json::from_str::<ErrorEnvelope>(&raw) {
            Ok(envelope) => map_error_code(&envelope.error.message),
            Err(_) => AuthError::Provider(format!("HTTP {}", status.as_u16())),
        };
        debug!("Firebase {} failed: {:?}", method, err);
        Err(err)
    }

    async fn post<B, T>(&self, method: &'static str, body: B) -> Result<T, AuthError>
    where
        B: Serialize + Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        let provider = self.clone();
        tokio::task::spawn_blocking(move || provider.post_sync(method, &body))
            .await
            .unwrap_or_else(|e| Err(AuthError::Network(e.to_string())))
    }

    async fn password_call(
        &self,
        method: &'static str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let body = PasswordRequest {
            email: email.to_string(),
            password: password.to_string(),
            return_secure_token: true,
        };
        let token: TokenResponse = self.post(method, body).await?;
        Ok(AuthUser {
            uid: token.local_id,
            email: if token.email.is_empty() {
                email.to_string()
            } else {
                token.email
            },
            id_token: token.id_token,
            refresh_token: token.refresh_token,
        })
    }
}

/// Map an Identity Toolkit error message (e.g. `WEAK_PASSWORD : Password
/// should be at least 6 characters`) to an [`AuthError`]
pub(crate) fn map_error_code(message: &str) -> AuthError {
    let (code, detail) = match message.split_once(':') {
        Some((code, detail)) => (code.trim(), detail.trim()),
        None => (message.trim(), ""),
    };

    match code {
        "EMAIL_EXISTS" => AuthError::EmailInUse,
        "INVALID_EMAIL" | "MISSING_EMAIL" => AuthError::InvalidEmail,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            AuthError::InvalidCredentials
        }
        "WEAK_PASSWORD" | "MISSING_PASSWORD" => AuthError::WeakPassword(if detail.is_empty() {
            "Password should be at least 6 characters".to_string()
        } else {
            detail.to_string()
        }),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthError::TooManyAttempts,
        other => AuthError::Provider(other.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.password_call("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.password_call("signUp", email, password).await
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let _: serde_json::Value = self
            .post(
                "sendOobCode",
                OobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email: email.to_string(),
                },
            )
            .await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Firebase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_code() {
        assert_eq!(map_error_code("EMAIL_EXISTS"), AuthError::EmailInUse);
        assert_eq!(map_error_code("INVALID_EMAIL"), AuthError::InvalidEmail);
        assert_eq!(
            map_error_code("INVALID_LOGIN_CREDENTIALS"),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            map_error_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            AuthError::WeakPassword("Password should be at least 6 characters".to_string())
        );
        assert_eq!(
            map_error_code("TOO_MANY_ATTEMPTS_TRY_LATER : Try again later."),
            AuthError::TooManyAttempts
        );
        assert_eq!(
            map_error_code("OPERATION_NOT_ALLOWED"),
            AuthError::Provider("OPERATION_NOT_ALLOWED".to_string())
        );
    }

    #[test]
    fn test_request_serialization_is_camel_case() {
        let req = PasswordRequest {
            email: "a@b.c".to_string(),
            password: "secret1".to_string(),
            return_secure_token: true,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["returnSecureToken"], true);

        let req = OobCodeRequest {
            request_type: "PASSWORD_RESET",
            email: "a@b.c".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["requestType"], "PASSWORD_RESET");
    }

    #[test]
    fn test_endpoint_format() {
        let provider = FirebaseIdentityProvider::new(&AuthConfig {
            api_key: "KEY".to_string(),
            base_url: "http://localhost:9099/v1/".to_string(),
            timeout_secs: 1,
        });
        assert_eq!(
            provider.endpoint("signUp"),
            "http://localhost:9099/v1/accounts:signUp?key=KEY"
        );
    }
}
