//! Dashboard landing page for signed-in users.
//!
//! Link management lives behind this page; the session layer only supplies
//! the user card, sign-out, and the admin entry point.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use session::User;

use crate::state::auth::{use_auth, use_role};

/// Up to two uppercase initials for an avatar placeholder.
pub fn initials(name: &str, email: &str) -> String {
    let from_name: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if !from_name.is_empty() {
        return from_name;
    }
    email.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}

/// Text shown next to the avatar.
pub fn display_name(user: &User) -> &str {
    if user.name.trim().is_empty() { &user.email } else { &user.name }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let role = use_role();
    let user = move || auth.user();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Your links"</h1>
                <div class="dashboard-header__actions">
                    <Show when=move || role.get().is_admin>
                        <a href="/admin" class="btn">"Admin"</a>
                    </Show>
                    <button class="btn" type="button" on:click=move |_| auth.logout()>
                        "Sign out"
                    </button>
                </div>
            </header>
            {move || {
                user()
                    .map(|user| {
                        let label = display_name(&user).to_owned();
                        let badge = initials(&user.name, &user.email);
                        let role_label = user.role.as_str();
                        view! {
                            <section class="user-card">
                                {match user.avatar.clone() {
                                    Some(src) => view! { <img class="user-card__avatar" src=src alt=""/> }.into_any(),
                                    None => view! { <span class="user-card__initials">{badge}</span> }.into_any(),
                                }}
                                <div class="user-card__body">
                                    <p class="user-card__name">{label}</p>
                                    <p class="user-card__email">{user.email.clone()}</p>
                                    <span class="user-card__role">{role_label}</span>
                                </div>
                            </section>
                        }
                    })
            }}
        </div>
    }
}
