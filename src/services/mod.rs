//! Service layer
//!
//! External collaborators shared by the TUI and the CLI:
//! link shortening and account identity.

pub mod identity;
pub mod shortener;

pub use identity::{
    AuthContext, AuthError, AuthState, AuthUser, FirebaseIdentityProvider, IdentityProvider,
    Subscription,
};
pub use shortener::{ShorteningService, TinyUrlService, build_shortening_service};
