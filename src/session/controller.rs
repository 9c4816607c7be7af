use std::sync::Arc;

use tracing::{debug, info, warn};

use super::gate::{Confirmation, REMOVE_PROMPT, UserConfirmationGate};
use super::{SessionStatus, ShortLinkSession, Transition};
use crate::errors::ScissorsError;
use crate::services::ShorteningService;

/// Shown when the shortening service fails for any reason
pub const CREATE_FAILED_MESSAGE: &str = "Failed to shorten the URL. Please try again.";

/// Shown when submit is called with nothing to shorten
pub const BLANK_URL_MESSAGE: &str = "Please enter a URL to shorten";

/// A create request that has been issued but not yet completed
///
/// Returned by [`LinkLifecycleController::begin_submit`]. Running it does not
/// touch the session, so an event loop can drive it on a separate task and
/// hand the result back through [`LinkLifecycleController::complete_submit`].
pub struct PendingRequest {
    service: Arc<dyn ShorteningService>,
    long_url: String,
}

impl PendingRequest {
    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub async fn run(self) -> Result<String, ScissorsError> {
        self.service.create(&self.long_url).await
    }
}

/// Owns the [`ShortLinkSession`] and mediates create/display/confirm-delete
pub struct LinkLifecycleController {
    service: Arc<dyn ShorteningService>,
    session: ShortLinkSession,
}

impl LinkLifecycleController {
    pub fn new(service: Arc<dyn ShorteningService>) -> Self {
        Self {
            service,
            session: ShortLinkSession::new(),
        }
    }

    pub fn session(&self) -> &ShortLinkSession {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    pub fn service_name(&self) -> &'static str {
        self.service.name()
    }

    /// Submit `long_url` and wait for the service to respond
    pub async fn submit(&mut self, long_url: &str) -> Transition {
        match self.begin_submit(long_url) {
            Ok(request) => {
                let result = request.run().await;
                self.complete_submit(result)
            }
            Err(transition) => transition,
        }
    }

    /// Idle → Pending. Returns the request to run.
    ///
    /// Blank input returns [`Transition::BlankInput`]: the session stays Idle
    /// with `last_error` set and no request is issued.
    pub fn begin_submit(&mut self, long_url: &str) -> Result<PendingRequest, Transition> {
        if self.session.status != SessionStatus::Idle {
            debug!("submit ignored in {} state", self.session.status);
            return Err(self.rejected());
        }

        let long_url = long_url.trim();
        if long_url.is_empty() {
            self.session.last_error = Some(BLANK_URL_MESSAGE.to_string());
            return Err(Transition::BlankInput);
        }

        self.session.long_url = long_url.to_string();
        self.session.last_error = None;
        self.session.status = SessionStatus::Pending;
        debug!("Shortening {} via {}", long_url, self.service.name());

        Ok(PendingRequest {
            service: Arc::clone(&self.service),
            long_url: long_url.to_string(),
        })
    }

    /// Pending → Ready on success, Pending → Idle with `last_error` on failure
    pub fn complete_submit(&mut self, result: Result<String, ScissorsError>) -> Transition {
        if self.session.status != SessionStatus::Pending {
            debug!("late create response ignored in {} state", self.session.status);
            return self.rejected();
        }

        match result {
            Ok(short_url) => {
                info!("Shortened {} -> {}", self.session.long_url, short_url);
                self.session.short_url = Some(short_url);
                self.session.last_error = None;
                self.session.status = SessionStatus::Ready;
            }
            Err(e) => {
                warn!("Create request for {} failed: {}", self.session.long_url, e);
                self.session.short_url = None;
                self.session.last_error = Some(CREATE_FAILED_MESSAGE.to_string());
                self.session.status = SessionStatus::Idle;
            }
        }
        Transition::Applied
    }

    /// Ready → ConfirmingDelete. Only arms the confirmation gate.
    pub fn request_removal(&mut self) -> Transition {
        if self.session.status != SessionStatus::Ready {
            return self.rejected();
        }
        self.session.status = SessionStatus::ConfirmingDelete;
        Transition::Applied
    }

    /// ConfirmingDelete → Idle, clearing the short URL locally.
    ///
    /// The provider is never told; the short URL stays valid there.
    pub fn confirm_removal(&mut self) -> Transition {
        if self.session.status != SessionStatus::ConfirmingDelete {
            return self.rejected();
        }
        if let Some(short_url) = self.session.short_url.take() {
            info!("Cleared short URL {}", short_url);
        }
        self.session.last_error = None;
        self.session.status = SessionStatus::Idle;
        Transition::Applied
    }

    /// ConfirmingDelete → Ready, short URL unchanged
    pub fn cancel_removal(&mut self) -> Transition {
        if self.session.status != SessionStatus::ConfirmingDelete {
            return self.rejected();
        }
        self.session.status = SessionStatus::Ready;
        Transition::Applied
    }

    /// Run the full removal dialogue through `gate`
    ///
    /// Returns the gate's answer, or `None` if removal could not be
    /// requested in the current state.
    pub fn remove_with(&mut self, gate: &dyn UserConfirmationGate) -> Option<Confirmation> {
        if !self.request_removal().is_applied() {
            return None;
        }
        let answer = gate.ask(REMOVE_PROMPT);
        match answer {
            Confirmation::Confirmed => self.confirm_removal(),
            Confirmation::Cancelled => self.cancel_removal(),
        };
        Some(answer)
    }

    fn rejected(&self) -> Transition {
        Transition::Rejected {
            status: self.session.status,
        }
    }
}
