//! Route guards for signed-in and role-restricted pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards read the shared auth context and never start a resolution of their
//! own; `AuthProvider` owns that. While the session resolves they render the
//! loading interstitial, so protected content never flashes before the role
//! is known.
//!
//! DESIGN
//! ======
//! `ProtectedRoute` and `AdminRoute` are thin wrappers over `Guarded`, which
//! evaluates a `session::Guard` against the current state. Redirects replace
//! the history entry.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use session::{Guard, GuardDecision};

use crate::components::access_denied::{AccessDenied, denial_detail};
use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::use_auth;
use crate::util::auth::install_guard_redirect;

/// Render `children` only when `guard` admits the current session.
#[component]
pub fn Guarded(guard: Guard, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let decision = Memo::new(move |_| state.with(|s| guard.decide(s)));
    let detail = Signal::derive(move || state.with(|s| denial_detail(guard.denial(s).as_ref())));

    install_guard_redirect(auth, decision);

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::RedirectHome => ().into_any(),
        GuardDecision::Forbidden => view! { <AccessDenied detail=detail/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Any signed-in user.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    Guarded(GuardedProps { guard: Guard::protected(), children })
}

/// Admins, or super-admins only when `require_super_admin` is set.
#[component]
pub fn AdminRoute(#[prop(optional)] require_super_admin: bool, children: ChildrenFn) -> impl IntoView {
    Guarded(GuardedProps { guard: Guard::admin(require_super_admin), children })
}
