//! Short-link session lifecycle
//!
//! The session is the local, transient record of one create → display →
//! confirm-delete cycle. It is owned by [`LinkLifecycleController`] and is
//! never persisted.
//!
//! ```text
//!            submit            ok
//!   Idle ───────────▶ Pending ─────▶ Ready ◀──────────┐
//!    ▲                   │             │ request       │ cancel
//!    │        err        │             ▼ removal       │
//!    └───────────────────┘      ConfirmingDelete ──────┘
//!    ▲                                 │
//!    └────────────── confirm ──────────┘
//! ```

mod controller;
mod gate;

pub use controller::{
    BLANK_URL_MESSAGE, CREATE_FAILED_MESSAGE, LinkLifecycleController, PendingRequest,
};
pub use gate::{Confirmation, FixedGate, LineGate, REMOVE_PROMPT, UserConfirmationGate};

use strum::{AsRefStr, Display};

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
pub enum SessionStatus {
    #[default]
    Idle,
    Pending,
    Ready,
    ConfirmingDelete,
}

impl SessionStatus {
    /// Whether a short URL must be present in this status
    pub fn holds_short_url(self) -> bool {
        matches!(self, Self::Ready | Self::ConfirmingDelete)
    }
}

/// Outcome of a controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// Precondition did not hold; the session is unchanged
    Rejected { status: SessionStatus },
    /// Submit with blank input: still Idle, only `last_error` is set
    BlankInput,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// One short-link creation/removal cycle
///
/// Fields are private so that `short_url` stays in lockstep with `status`;
/// only the controller mutates a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortLinkSession {
    long_url: String,
    status: SessionStatus,
    short_url: Option<String>,
    last_error: Option<String>,
}

impl ShortLinkSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `short_url` is defined iff status is Ready or ConfirmingDelete
    pub fn is_consistent(&self) -> bool {
        self.short_url.is_some() == self.status.holds_short_url()
    }
}
