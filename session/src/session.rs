//! The tab-wide authentication context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthSession` is constructed per application instance and handed to
//! the UI through a context provider. It is the single source of truth for who
//! is signed in; route guards and pages only read its state.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded and cooperative. The only suspension point is the resolver
//! call. Overlapping `refresh_auth` calls are allowed: each takes a ticket from
//! the `SessionMachine`, and only the latest ticket may write state. Superseded
//! calls still run to completion; their results are dropped.
//!
//! Cross-tab changes to the token store are not observed. Another tab's
//! sign-in or sign-out only becomes visible here after the next `mount` or
//! `refresh_auth`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::config::AuthConfig;
use crate::resolver::SessionResolver;
use crate::role::RoleFlags;
use crate::state::{Begin, Completion, SessionMachine, SessionState};
use crate::token::TokenStore;

type Observer = Box<dyn Fn(&SessionState)>;

/// Authentication context bound to a token store and a resolver.
pub struct AuthSession<S, R> {
    config: AuthConfig,
    store: S,
    resolver: R,
    machine: RefCell<SessionMachine>,
    observers: RefCell<Vec<Observer>>,
}

impl<S: TokenStore, R: SessionResolver> AuthSession<S, R> {
    /// Build an unmounted session. State is [`SessionState::initial`] until
    /// [`Self::mount`] runs.
    pub fn new(config: AuthConfig, store: S, resolver: R) -> Self {
        Self {
            config,
            store,
            resolver,
            machine: RefCell::new(SessionMachine::new()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.machine.borrow().state().clone()
    }

    /// Role projection of the current user.
    pub fn role(&self) -> RoleFlags {
        self.machine.borrow().state().role()
    }

    /// Register an observer called after every state change.
    ///
    /// Observers must not call `subscribe` themselves.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Initial resolution when the application starts.
    pub async fn mount(&self) -> SessionState {
        log::debug!("auth: mounting session");
        self.refresh_auth().await
    }

    /// Re-read the token store and resolve it. Returns the state after this
    /// call settles, which reflects a newer call instead if one superseded it.
    pub async fn refresh_auth(&self) -> SessionState {
        let stored = self.store.get();
        let begin = self.machine.borrow_mut().begin(stored);
        self.publish();

        let ticket = match begin {
            Begin::Settled => {
                log::debug!("auth: no stored token, signed out");
                return self.state();
            }
            Begin::Resolve(ticket) => ticket,
        };

        log::debug!("auth: resolving session seq={}", ticket.seq());
        let outcome = self.resolver.resolve(ticket.token()).await;
        let completion = self.machine.borrow_mut().complete(&ticket, outcome);

        match completion {
            Completion::Authenticated => {
                if let Some(user) = &self.machine.borrow().state().user {
                    log::info!("auth: signed in user={} role={}", user.id, user.role);
                }
            }
            Completion::Rejected(err) => {
                log::warn!("auth: stored token rejected seq={}: {err}", ticket.seq());
                if self.store.get().as_deref() == Some(ticket.token()) {
                    self.store.clear();
                }
            }
            Completion::Stale => {
                log::debug!("auth: discarded stale resolution seq={}", ticket.seq());
                return self.state();
            }
        }

        self.publish();
        self.state()
    }

    /// Write a freshly issued token. Takes effect on the next `refresh_auth`.
    pub fn persist_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Clear the stored token and sign out. Returns the route to navigate to.
    pub fn logout(&self) -> &str {
        self.store.clear();
        self.machine.borrow_mut().reset();
        log::info!("auth: signed out");
        self.publish();
        &self.config.public_root
    }

    /// External URL that starts the OAuth flow. Navigating there unloads the
    /// page, so no local state changes.
    pub fn login_url(&self) -> String {
        self.config.login_url()
    }

    pub fn dismiss_notice(&self) {
        self.machine.borrow_mut().dismiss_notice();
        self.publish();
    }

    fn publish(&self) {
        let state = self.state();
        for observer in self.observers.borrow().iter() {
            observer(&state);
        }
    }
}
