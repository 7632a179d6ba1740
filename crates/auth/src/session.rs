//! The process-wide interactive session.
//!
//! `LoggedOut → (login ok) → LoggedIn → (logout) → LoggedOut`. There is no
//! timeout and no other state.

use crate::{Identity, IdentityStore, Role};

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Identity),
}

/// Currently authenticated identity, if any.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate against `store` and, on success, become active.
    ///
    /// Bad credentials are an expected outcome, reported as `false`. A failed
    /// attempt leaves any existing session untouched.
    pub fn login(&mut self, store: &IdentityStore, username: &str, credential: &str) -> bool {
        match store.authenticate(username, credential) {
            Ok(identity) => {
                tracing::info!(username, role = %identity.role(), "login succeeded");
                self.state = SessionState::LoggedIn(identity.clone());
                true
            }
            Err(err) => {
                tracing::info!(username, error = %err, "login failed");
                false
            }
        }
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        if let SessionState::LoggedIn(identity) = &self.state {
            tracing::info!(username = identity.username(), "logged out");
        }
        self.state = SessionState::LoggedOut;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::LoggedIn(identity) => Some(identity),
            SessionState::LoggedOut => None,
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        self.identity().map(Identity::role)
    }
}
