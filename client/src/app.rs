//! Root application component with routing and the auth provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{AdminRoute, ProtectedRoute};
use crate::pages::{
    admin::{AdminPage, AdminSettingsPage},
    auth_callback::AuthCallbackPage,
    dashboard::DashboardPage,
    home::HomePage,
};
use crate::state::auth::AuthProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `AuthProvider` sits inside the `Router` so auth redirects can use
/// client-side navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Link Dashboard"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <AdminRoute><AdminPage/></AdminRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("settings"))
                        view=|| view! { <AdminRoute require_super_admin=true><AdminSettingsPage/></AdminRoute> }
                    />
                </Routes>
            </AuthProvider>
        </Router>
    }
}
