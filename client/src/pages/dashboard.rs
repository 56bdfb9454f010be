//! Dashboard: the signed-in landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PrivateRoute`. The user record may still be resolving
//! when the page first renders, so every field reads through the signal.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::use_auth;
use crate::state::auth::AuthState;

/// Profile lines shown in the dashboard card: greeting, email, roles.
pub(crate) fn profile_lines(state: &AuthState) -> (String, String, String) {
    let user = state.user.as_ref();
    (
        format!("Welcome, {}!", state.display_name()),
        format!("Email: {}", user.map(|u| u.email.as_str()).unwrap_or_default()),
        format!("Roles: {}", user.map(crate::net::types::User::roles_label).unwrap_or_default()),
    )
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let lines = Memo::new(move |_| profile_lines(&auth.state.get()));
    let is_admin = Memo::new(move |_| auth.state.with(AuthState::is_admin));

    view! {
        <div class="page">
            <div class="page__inner">
                <h1 class="page__title">"Dashboard"</h1>
                <div class="card">
                    <h2 class="card__title">{move || lines.get().0}</h2>
                    <div class="card__body">
                        <p class="card__line">{move || lines.get().1}</p>
                        <p class="card__line">{move || lines.get().2}</p>
                        <div class="quick-actions">
                            <h3 class="quick-actions__title">"Quick Actions"</h3>
                            <div class="quick-actions__grid">
                                <A href="/products" attr:class="quick-action quick-action--products">
                                    <h4>"Manage Products"</h4>
                                    <p>"View and manage your products"</p>
                                </A>
                                <Show when=move || is_admin.get()>
                                    <A href="/admin" attr:class="quick-action quick-action--admin">
                                        <h4>"Admin Panel"</h4>
                                        <p>"Access admin features"</p>
                                    </A>
                                </Show>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
