//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical redirect behavior: signed-out tabs
//! leave immediately, role-denied tabs leave after the access-denied panel has
//! been visible for a moment. Both replace the current history entry so Back
//! does not return to the guarded page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use leptos::prelude::*;
use session::GuardDecision;

use crate::state::auth::AuthContext;

/// How long to wait before redirecting away, or `None` to stay.
pub fn redirect_delay(decision: GuardDecision, forbidden_delay: Duration) -> Option<Duration> {
    match decision {
        GuardDecision::RedirectHome => Some(Duration::ZERO),
        GuardDecision::Forbidden => Some(forbidden_delay),
        GuardDecision::Loading | GuardDecision::Render => None,
    }
}

/// Redirect to the public root whenever `decision` says the route must be left.
pub fn install_guard_redirect(auth: AuthContext, decision: Memo<GuardDecision>) {
    let config = auth.config();
    let home = config.public_root;
    let forbidden_delay = config.forbidden_redirect_delay;

    Effect::new(move || {
        let current = decision.get();
        let Some(delay) = redirect_delay(current, forbidden_delay) else {
            return;
        };
        if delay.is_zero() {
            auth.navigate_replace(&home);
        } else {
            schedule_redirect(auth, decision, current, home.clone(), delay);
        }
    });
}

/// Redirect after `delay` unless the decision changed in the meantime.
fn schedule_redirect(
    auth: AuthContext,
    decision: Memo<GuardDecision>,
    expected: GuardDecision,
    home: String,
    delay: Duration,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        if decision.try_get_untracked() == Some(expected) {
            auth.navigate_replace(&home);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, decision, expected, home, delay);
    }
}
