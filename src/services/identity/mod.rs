//! 身份认证服务模块
//!
//! - `IdentityProvider`: 登录 / 注册 / 找回密码的统一接口
//! - `FirebaseIdentityProvider`: Firebase Auth (Identity Toolkit REST API) 实现
//! - `AuthContext`: 显式传递的认证上下文，持有当前用户与状态订阅

mod context;
mod firebase;
mod provider;

pub use context::{AuthContext, AuthState, Subscription};
pub use firebase::FirebaseIdentityProvider;
pub use provider::{AuthError, AuthUser, IdentityProvider};
