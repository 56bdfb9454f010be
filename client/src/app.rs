//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::auth::provide_auth;
use crate::components::navbar::Navbar;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
    products::ProductsPage, register::RegisterPage,
};
use crate::util::auth::{AdminRoute, PrivateRoute};

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
/// Provides the auth context and sets up client-side routing. Guarded routes
/// wrap their page in `PrivateRoute` or `AdminRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Full Stack App"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <PrivateRoute><ProductsPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <AdminRoute><AdminPage/></AdminRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
