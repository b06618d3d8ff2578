//! Full-page interstitial shown while the session is still resolving.

use leptos::prelude::*;

/// Default message for session resolution.
pub const CHECKING_SESSION: &str = "Checking your session...";

#[component]
pub fn LoadingScreen(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| CHECKING_SESSION.to_owned());
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
