//! Dismissible banner for session-level notices such as an expired token.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::auth::use_auth;

#[component]
pub fn SessionNoticeBanner() -> impl IntoView {
    let auth = use_auth();
    let notice = move || auth.state().with(|s| s.notice);

    move || match notice() {
        Some(notice) => view! {
            <div class="session-notice" role="status">
                <span class="session-notice__message">{notice.message()}</span>
                <button
                    class="session-notice__dismiss"
                    type="button"
                    aria-label="Dismiss"
                    on:click=move |_| auth.dismiss_notice()
                >
                    "×"
                </button>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}
