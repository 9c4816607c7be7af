use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{
    AuthContext, FirebaseIdentityProvider, IdentityProvider, ShorteningService,
    build_shortening_service,
};

/// Services shared by every interface for the lifetime of the process
#[derive(Clone)]
pub struct StartupContext {
    pub shortener: Arc<dyn ShorteningService>,
    pub auth: AuthContext,
}

impl StartupContext {
    /// Assemble a context from explicit collaborators (used by tests)
    pub fn new(shortener: Arc<dyn ShorteningService>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            shortener,
            auth: AuthContext::new(identity),
        }
    }
}

/// 根据配置创建短链接服务与认证上下文
pub fn prepare_startup(config: &StaticConfig) -> StartupContext {
    let start_time = Instant::now();
    debug!("Preparing services...");

    let shortener = build_shortening_service(&config.shortener);
    let identity: Arc<dyn IdentityProvider> =
        Arc::new(FirebaseIdentityProvider::new(&config.auth));
    let context = StartupContext::new(shortener, identity);

    info!(
        "Services ready in {:.2?} (shortener: {}, identity: {})",
        start_time.elapsed(),
        context.shortener.name(),
        context.auth.provider_name()
    );
    context
}
