//! 短链接服务抽象层

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::tinyurl::TinyUrlService;
use crate::config::ShortenerConfig;
use crate::errors::ScissorsError;

/// 短链接生成 trait
///
/// 单次请求，不重试；任何失败都返回 `ScissorsError::CreateFailed`
#[async_trait]
pub trait ShorteningService: Send + Sync {
    /// 为 `long_url` 生成短链接
    async fn create(&self, long_url: &str) -> Result<String, ScissorsError>;

    /// 获取服务名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 根据配置创建短链接服务
pub fn build_shortening_service(config: &ShortenerConfig) -> Arc<dyn ShorteningService> {
    if config.api_token.is_empty() {
        warn!("Shortener: no API token configured, create requests will be rejected");
    }
    let service = TinyUrlService::new(config);
    info!("Shortener: Initialized with {} ({})", service.name(), config.api_url);
    Arc::new(service)
}
