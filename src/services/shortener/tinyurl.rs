//! TinyURL API 实现
//!
//! 同步 ureq 请求放在 spawn_blocking 中执行

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use ureq::Agent;

use super::provider::ShorteningService;
use crate::config::ShortenerConfig;
use crate::errors::ScissorsError;

#[derive(Debug, Clone, Serialize)]
struct CreateBody {
    url: String,
    domain: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    data: Option<CreateData>,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CreateData {
    tiny_url: String,
}

/// TinyURL 短链接服务
#[derive(Clone)]
pub struct TinyUrlService {
    agent: Agent,
    api_url: String,
    api_token: String,
    domain: String,
    description: String,
}

impl TinyUrlService {
    pub fn new(config: &ShortenerConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            domain: config.domain.clone(),
            description: config.description.clone(),
        }
    }

    /// 发送创建请求（同步，在 spawn_blocking 中调用）
    fn create_sync(&self, long_url: &str) -> Result<String, ScissorsError> {
        let body = CreateBody {
            url: long_url.to_string(),
            domain: self.domain.clone(),
            description: self.description.clone(),
        };

        let resp = self
            .agent
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Accept", "application/json")
            .send_json(&body)
            .map_err(|e| {
                warn!("TinyURL request to \"{}\" failed: {}", self.api_url, e);
                ScissorsError::create_failed(format!("request failed: {}", e))
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("TinyURL returned HTTP {}", status.as_u16());
            return Err(ScissorsError::create_failed(format!(
                "unexpected status {}",
                status.as_u16()
            )));
        }

        let parsed: CreateResponse = resp.into_body().read_json().map_err(|e| {
            warn!("TinyURL response parse failed: {}", e);
            ScissorsError::create_failed(format!("invalid response: {}", e))
        })?;

        match parsed.data {
            Some(data) if !data.tiny_url.is_empty() => {
                trace!("TinyURL created {}", data.tiny_url);
                Ok(data.tiny_url)
            }
            _ => Err(ScissorsError::create_failed(if parsed.errors.is_empty() {
                "response missing data.tiny_url".to_string()
            } else {
                parsed.errors.join("; ")
            })),
        }
    }
}

#[async_trait]
impl ShorteningService for TinyUrlService {
    async fn create(&self, long_url: &str) -> Result<String, ScissorsError> {
        let service = self.clone();
        let long_url = long_url.to_string();

        tokio::task::spawn_blocking(move || service.create_sync(&long_url))
            .await
            .unwrap_or_else(|e| {
                warn!("TinyURL spawn_blocking failed: {}", e);
                Err(ScissorsError::create_failed(e.to_string()))
            })
    }

    fn name(&self) -> &'static str {
        "TinyURL"
    }
}
