//! OAuth callback handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes the provider handshake and redirects the browser to
//! `/auth/callback?token=<token>`. This module runs once per visit to that
//! route: persist the token, re-resolve the session, and send the user on.
//!
//! The token is honored as-is. Replayed or stale URLs are not detected here;
//! a dead token simply fails resolution and the dashboard guard sends the
//! user home.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use std::time::Duration;

use crate::error::CallbackError;
use crate::resolver::SessionResolver;
use crate::session::AuthSession;
use crate::token::TokenStore;

pub const TOKEN_PARAM: &str = "token";

/// Position in the single-visit callback lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackPhase {
    ReceivingToken,
    Persisting,
    Refreshing,
    Redirecting,
    NoToken,
    RedirectingHome,
}

impl CallbackPhase {
    /// Status line shown while this phase is active.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ReceivingToken => "Completing sign-in...",
            Self::Persisting => "Saving your session...",
            Self::Refreshing => "Loading your account...",
            Self::Redirecting => "Signed in. Redirecting to your dashboard...",
            Self::NoToken => "Sign-in failed: no token was returned.",
            Self::RedirectingHome => "Sign-in failed. Returning to the home page...",
        }
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::NoToken | Self::RedirectingHome)
    }
}

/// Where the callback page should go once the flow finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Token persisted and session refreshed; replace-navigate to `to`.
    Dashboard { to: String },
    /// No usable token; show `error` and replace-navigate to `to` after `after`.
    Failed { error: CallbackError, to: String, after: Duration },
}

/// Extract the `token` parameter from a raw query string.
///
/// Accepts an optional leading `?`, percent-decodes, and treats `+` as a
/// space. The first `token` parameter wins; an empty value counts as missing.
#[must_use]
pub fn callback_token(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let raw = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(key) == TOKEN_PARAM).then_some(value)
    })?;
    let token = decode_component(raw);
    (!token.is_empty()).then_some(token)
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}

/// Run the callback flow for `query`, reporting each phase to `on_phase`.
///
/// With a token: persist, refresh, then head to the dashboard regardless of
/// the resolution result (the dashboard guard handles rejection). Without
/// one: the session and token store are left untouched.
pub async fn complete_callback<S, R, F>(session: &AuthSession<S, R>, query: &str, mut on_phase: F) -> CallbackOutcome
where
    S: TokenStore,
    R: SessionResolver,
    F: FnMut(CallbackPhase),
{
    on_phase(CallbackPhase::ReceivingToken);
    let config = session.config();

    let Some(token) = callback_token(query) else {
        log::warn!("auth: callback reached without a token");
        on_phase(CallbackPhase::NoToken);
        on_phase(CallbackPhase::RedirectingHome);
        return CallbackOutcome::Failed {
            error: CallbackError::MissingToken,
            to: config.public_root.clone(),
            after: config.callback_failure_delay,
        };
    };

    on_phase(CallbackPhase::Persisting);
    session.persist_token(&token);

    on_phase(CallbackPhase::Refreshing);
    let state = session.refresh_auth().await;
    log::info!("auth: callback refreshed session phase={:?}", state.phase());

    on_phase(CallbackPhase::Redirecting);
    CallbackOutcome::Dashboard { to: config.dashboard_root.clone() }
}
