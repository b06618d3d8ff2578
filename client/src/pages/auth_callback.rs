//! OAuth callback landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend redirects here with `?token=...` after a successful sign-in.
//! The page persists the token, refreshes the session, and replaces itself
//! with the dashboard. Without a token it shows the failure message and
//! returns home after the configured delay.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use session::CallbackPhase;

use crate::state::auth::{AuthContext, use_auth};

/// CSS modifier for the status line of `phase`.
pub fn phase_class(phase: CallbackPhase) -> &'static str {
    if phase.is_failure() {
        "callback-status callback-status--error"
    } else {
        "callback-status"
    }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let phase = RwSignal::new(CallbackPhase::ReceivingToken);

    // Runs once after hydration; the query is read untracked.
    Effect::new(move || {
        let query = location.search.get_untracked();
        run_callback(auth, query, phase);
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Signing you in"</h1>
                <p class=move || phase_class(phase.get())>{move || phase.get().message()}</p>
            </div>
        </div>
    }
}

fn run_callback(auth: AuthContext, query: String, phase: RwSignal<CallbackPhase>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = auth
            .complete_callback(query, |next| {
                let _ = phase.try_set(next);
            })
            .await;
        match outcome {
            session::CallbackOutcome::Dashboard { to } => auth.navigate_replace(&to),
            session::CallbackOutcome::Failed { error, to, after } => {
                log::warn!("auth: callback failed: {error}");
                gloo_timers::future::sleep(after).await;
                auth.navigate_replace(&to);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query, phase);
    }
}
