//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, google_callback::GoogleCallbackPage, home::HomePage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::auth::AuthContext;

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
/// Builds the one auth session for the page, provides it to every route,
/// and starts resolving the stored token.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    provide_context(auth.clone());
    auth.start();

    // Seller and admin consoles are not built yet; their landing routes
    // share the member dashboard.
    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace.css"/>
        <Title text="Workflow Marketplace"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"), StaticSegment("google"))
                    view=GoogleCallbackPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("seller") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
