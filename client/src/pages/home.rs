//! Public root: sign-in entry point and expired-session notice.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::session_notice::SessionNoticeBanner;
use crate::state::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let login_href = auth.config().login_url();
    let dashboard_href = auth.config().dashboard_root;

    let signed_in = move || state.with(|s| !s.loading && s.user.is_some());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Link Dashboard"</h1>
                <p class="login-card__subtitle">"Shorten, track, and manage your links"</p>
                <SessionNoticeBanner/>
                {move || {
                    if signed_in() {
                        view! {
                            <a href=dashboard_href.clone() class="login-button">
                                "Go to dashboard"
                            </a>
                        }
                        .into_any()
                    } else {
                        view! {
                            <a
                                href=login_href.clone()
                                class="login-button"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    auth.login();
                                }
                            >
                                "Sign in with Google"
                            </a>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
