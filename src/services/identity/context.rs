//! 认证上下文
//!
//! 启动时创建一次，显式传给各个界面；当前用户与状态监听器保存在同一个槽位中。
//! 同一时刻最多只有一个监听器，重复订阅会替换之前的监听器。

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::provider::{AuthError, AuthUser, IdentityProvider};

/// Current authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    SignedIn(AuthUser),
    SignedOut,
}

impl AuthState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::SignedOut => None,
        }
    }
}

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

#[derive(Default)]
struct AuthSlot {
    user: Option<AuthUser>,
    listener: Option<(u64, Listener)>,
    next_id: u64,
}

impl AuthSlot {
    fn state(&self) -> AuthState {
        match &self.user {
            Some(user) => AuthState::SignedIn(user.clone()),
            None => AuthState::SignedOut,
        }
    }
}

#[derive(Clone)]
pub struct AuthContext {
    provider: Arc<dyn IdentityProvider>,
    slot: Arc<Mutex<AuthSlot>>,
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("provider", &self.provider.name())
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

impl AuthContext {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        info!("AuthContext: using {} identity provider", provider.name());
        Self {
            provider,
            slot: Arc::new(Mutex::new(AuthSlot::default())),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.slot.lock().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.slot.lock().user.is_some()
    }

    pub fn state(&self) -> AuthState {
        self.slot.lock().state()
    }

    /// 订阅认证状态变化
    ///
    /// 监听器会立即收到一次当前状态。返回的 `Subscription` 被 drop 时自动退订。
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, state) = {
            let mut slot = self.slot.lock();
            let id = slot.next_id;
            slot.next_id += 1;
            if slot.listener.is_some() {
                debug!("AuthContext: replacing active subscription");
            }
            slot.listener = Some((id, Arc::clone(&listener)));
            (id, slot.state())
        };

        listener(&state);

        Subscription {
            id,
            slot: Arc::clone(&self.slot),
            active: true,
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self.provider.sign_in(email, password).await?;
        info!("Signed in as {}", user.email);
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// 注册成功后用户即处于登录状态
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self.provider.sign_up(email, password).await?;
        info!("Registered account {}", user.email);
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    pub async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.provider.send_password_reset(email).await?;
        info!("Password reset email requested for {}", email);
        Ok(())
    }

    /// 退出登录；服务端失败只记录日志，本地状态总是清空
    pub async fn sign_out(&self) {
        let Some(user) = self.current_user() else {
            return;
        };
        if let Err(e) = self.provider.sign_out(&user).await {
            warn!("Sign out at {} failed: {}", self.provider.name(), e);
        }
        info!("Signed out {}", user.email);
        self.set_user(None);
    }

    fn set_user(&self, user: Option<AuthUser>) {
        let (listener, state) = {
            let mut slot = self.slot.lock();
            slot.user = user;
            (slot.listener.as_ref().map(|(_, l)| Arc::clone(l)), slot.state())
        };
        // 在锁外回调，监听器可以安全地再次访问上下文
        if let Some(listener) = listener {
            listener(&state);
        }
    }
}

/// Handle to the active auth listener
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    slot: Arc<Mutex<AuthSlot>>,
    active: bool,
}

impl Subscription {
    /// Whether this subscription still owns the listener slot
    pub fn is_active(&self) -> bool {
        self.active && matches!(self.slot.lock().listener, Some((id, _)) if id == self.id)
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut slot = self.slot.lock();
        if matches!(slot.listener, Some((id, _)) if id == self.id) {
            slot.listener = None;
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
