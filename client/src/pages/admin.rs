//! Admin console pages. Access is enforced by `AdminRoute` in the route table.

use leptos::prelude::*;

use crate::state::auth::{use_auth, use_role};

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let role = use_role();
    let email = move || auth.user().map(|u| u.email).unwrap_or_default();

    view! {
        <div class="admin-page">
            <h1>"Admin console"</h1>
            <p class="admin-page__who">"Signed in as " {email}</p>
            <nav class="admin-page__nav">
                <a href="/dashboard" class="btn">"Dashboard"</a>
                <Show when=move || role.get().is_super_admin>
                    <a href="/admin/settings" class="btn">"Settings"</a>
                </Show>
            </nav>
        </div>
    }
}

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Platform settings"</h1>
            <p>"Only super-admins can change platform-wide settings."</p>
            <a href="/admin" class="btn">"Back to admin"</a>
        </div>
    }
}
