//! Panel shown when a signed-in user lacks the role a route requires.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `Guarded` for `GuardDecision::Forbidden`. The redirect itself
//! is scheduled by `util::auth::install_guard_redirect`; this panel only
//! explains what happened.

#[cfg(test)]
#[path = "access_denied_test.rs"]
mod access_denied_test;

use leptos::prelude::*;
use session::AccessError;

/// Human-readable explanation for a denial, if one is known.
pub fn denial_detail(denial: Option<&AccessError>) -> String {
    match denial {
        Some(err) => format!("Your {err}."),
        None => "You do not have permission to view this page.".to_owned(),
    }
}

#[component]
pub fn AccessDenied(#[prop(into)] detail: Signal<String>) -> impl IntoView {
    view! {
        <div class="access-denied" role="alert">
            <h1 class="access-denied__title">"Access denied"</h1>
            <p class="access-denied__detail">{move || detail.get()}</p>
            <p class="access-denied__hint">"Redirecting to the home page..."</p>
        </div>
    }
}
