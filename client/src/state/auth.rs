//! Auth-session context for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` builds the one `AuthSession` for the tab and mirrors its
//! state into an `RwSignal` so route guards and user-aware components re-render
//! on every transition. Components reach it through `use_auth` / `use_role`;
//! there is no module-level singleton.
//!
//! Server rendering never resolves a session: effects do not run during SSR,
//! so the server always renders the initial loading state and the browser
//! takes over after hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{AuthConfig, AuthSession, CallbackOutcome, CallbackPhase, RoleFlags, SessionState, User};

use crate::net::api::ApiResolver;
use crate::util::token_store::BrowserTokenStore;

/// Session type bound to browser storage and the `/auth/me` endpoint.
pub type BrowserSession = AuthSession<BrowserTokenStore, ApiResolver>;

type Navigator = Rc<dyn Fn(&str)>;

/// Copyable handle to the tab's authentication context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<SessionState>,
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
    navigator: StoredValue<Navigator, LocalStorage>,
}

impl AuthContext {
    /// Reactive session state.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn config(&self) -> AuthConfig {
        self.session.with_value(|session| session.config().clone())
    }

    /// Leave the app for the OAuth sign-in page.
    pub fn login(&self) {
        let url = self.session.with_value(|session| session.login_url());
        log::info!("auth: redirecting to sign-in");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }

    /// Sign out and replace the current page with the public root.
    pub fn logout(&self) {
        let target = self.session.with_value(|session| session.logout().to_owned());
        self.navigate_replace(&target);
    }

    /// Re-resolve whatever token is stored now.
    pub async fn refresh_auth(self) -> SessionState {
        let session = self.session.get_value();
        session.refresh_auth().await
    }

    /// Run the OAuth callback flow for the raw `query` string.
    pub async fn complete_callback(self, query: String, on_phase: impl FnMut(CallbackPhase)) -> CallbackOutcome {
        let active = self.session.get_value();
        session::complete_callback(&*active, &query, on_phase).await
    }

    pub fn dismiss_notice(&self) {
        self.session.with_value(|session| session.dismiss_notice());
    }

    /// Client-side navigation that replaces the current history entry.
    pub fn navigate_replace(&self, path: &str) {
        let _ = self.navigator.try_with_value(|navigate| navigate(path));
    }

    fn mount(self) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session.get_value();
            leptos::task::spawn_local(async move {
                session.mount().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}

/// Navigation options used for every auth-driven redirect.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Provide the auth context to `children` and start the initial resolution.
///
/// Must be rendered inside the `<Router>`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = crate::config::auth_config();
    let session = Rc::new(AuthSession::new(
        config.clone(),
        BrowserTokenStore::new(&config.token_key),
        ApiResolver::new(&config),
    ));

    let state = RwSignal::new(session.state());
    session.subscribe(move |next| {
        let _ = state.try_set(next.clone());
    });

    let navigate = use_navigate();
    let navigator: Navigator = Rc::new(move |path: &str| navigate(path, replace_options()));

    let auth = AuthContext {
        state,
        session: StoredValue::new_local(session),
        navigator: StoredValue::new_local(navigator),
    };
    provide_context(auth);

    Effect::new(move || auth.mount());

    children()
}

/// The tab's auth context. Panics outside an `AuthProvider`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Role projection of the current user, recomputed on every state change.
pub fn use_role() -> Signal<RoleFlags> {
    let state = use_auth().state;
    Signal::derive(move || state.with(SessionState::role))
}
