//! 短链接服务模块
//!
//! 通过第三方 API 生成短链接，当前支持：
//! - TinyURL (`POST /create`, Bearer token)

mod provider;
mod tinyurl;

pub use provider::{ShorteningService, build_shortening_service};
pub use tinyurl::TinyUrlService;
