//! Session state and its transition core.
//!
//! DESIGN
//! ======
//! `SessionMachine` is synchronous and I/O free. The async driver
//! (`AuthSession`) asks it to `begin` a resolution, performs the network call,
//! then hands the outcome back through `complete`. Every `begin` and `reset`
//! issues a new sequence number; a completion whose ticket is not the latest
//! issued is stale and leaves state untouched. Results are therefore applied in
//! issue order no matter which response arrives first.
//!
//! INVARIANTS
//! ==========
//! - No token => no user, `loading == false`.
//! - A user is only ever installed together with the token it was resolved from.
//! - `loading` is true from the first `begin` that found a token until the
//!   matching `complete`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::error::AuthError;
use crate::role::RoleFlags;
use crate::user::User;

/// Coarse lifecycle position of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Resolving,
    Authenticated,
}

/// Message the public UI should surface after a silent sign-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    /// A stored token was rejected by the server.
    Expired,
}

impl SessionNotice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Expired => "Your session has expired. Please sign in again.",
        }
    }
}

/// Snapshot of the tab's authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub token: Option<String>,
    pub notice: Option<SessionNotice>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

impl SessionState {
    /// State before the first resolution attempt has finished.
    #[must_use]
    pub fn initial() -> Self {
        Self { user: None, loading: true, token: None, notice: None }
    }

    /// Settled, signed-out state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false, token: None, notice: None }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Resolving
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase() == AuthPhase::Authenticated
    }

    /// Role projection of the current user.
    #[must_use]
    pub fn role(&self) -> RoleFlags {
        RoleFlags::of(self.user.as_ref())
    }
}

/// Handle for one in-flight resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    token: String,
}

impl Ticket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Result of starting a resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Begin {
    /// No token was stored; the state is already final.
    Settled,
    /// The token must be resolved and the outcome passed to `complete`.
    Resolve(Ticket),
}

/// Result of applying a resolution outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Authenticated,
    /// The token was rejected; the caller must discard it.
    Rejected(AuthError),
    /// A newer resolution or a logout superseded this one.
    Stale,
}

/// Sequence-tagged transition core for a single session.
#[derive(Clone, Debug, Default)]
pub struct SessionMachine {
    state: SessionState,
    issued: u64,
}

impl SessionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Latest sequence number handed out.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Start a (re-)resolution from whatever the token store currently holds.
    pub fn begin(&mut self, stored: Option<String>) -> Begin {
        self.issued += 1;
        let Some(token) = stored else {
            self.state.user = None;
            self.state.token = None;
            self.state.loading = false;
            return Begin::Settled;
        };

        if self.state.token.as_deref() != Some(token.as_str()) {
            self.state.user = None;
        }
        self.state.token = Some(token.clone());
        self.state.loading = true;
        Begin::Resolve(Ticket { seq: self.issued, token })
    }

    /// Apply a resolution outcome if `ticket` is still the latest issued.
    pub fn complete(&mut self, ticket: &Ticket, outcome: Result<User, AuthError>) -> Completion {
        if ticket.seq != self.issued {
            return Completion::Stale;
        }
        match outcome {
            Ok(user) => {
                self.state = SessionState {
                    user: Some(user),
                    loading: false,
                    token: Some(ticket.token.clone()),
                    notice: None,
                };
                Completion::Authenticated
            }
            Err(err) => {
                self.state = SessionState {
                    user: None,
                    loading: false,
                    token: None,
                    notice: Some(SessionNotice::Expired),
                };
                Completion::Rejected(err)
            }
        }
    }

    /// Sign out, superseding any in-flight resolution.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = SessionState::signed_out();
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }
}
