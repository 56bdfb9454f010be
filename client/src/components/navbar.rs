//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link set depends on auth: anonymous visitors get Login/Register, signed-in
//! users get the app sections plus a logout button, and admins additionally
//! see the Admin link and an `(Admin)` marker next to their name.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;
use crate::state::auth::AuthState;

/// Greeting shown at the right of the bar for a signed-in user.
pub(crate) fn welcome_label(state: &AuthState) -> String {
    let mut label = format!("Welcome, {}", state.display_name());
    if state.is_admin() {
        label.push_str(" (Admin)");
    }
    label
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    let is_authenticated = Memo::new(move |_| auth.state.with(AuthState::is_authenticated));
    let is_admin = Memo::new(move |_| auth.state.with(AuthState::is_admin));

    let on_logout = move |_| {
        auth.logout();
        navigate.with_value(|nav| nav("/login", NavigateOptions::default()));
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__links">
                    <A href="/dashboard" attr:class="navbar__brand">
                        "Full Stack App"
                    </A>
                    <Show when=move || is_authenticated.get()>
                        <A href="/dashboard" attr:class="navbar__link">
                            "Dashboard"
                        </A>
                        <A href="/products" attr:class="navbar__link">
                            "Products"
                        </A>
                        <Show when=move || is_admin.get()>
                            <A href="/admin" attr:class="navbar__link">
                                "Admin"
                            </A>
                        </Show>
                    </Show>
                </div>
                <div class="navbar__session">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <A href="/login" attr:class="navbar__link">
                                    "Login"
                                </A>
                                <A href="/register" attr:class="btn navbar__cta">
                                    "Register"
                                </A>
                            }
                        }
                    >
                        <span class="navbar__welcome">{move || welcome_label(&auth.state.get())}</span>
                        <button class="btn navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
