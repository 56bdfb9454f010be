//! Route guards keyed off the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards only shape the UI. The API still rejects requests whose token or
//! role does not allow them; a guard that lets a page render never grants
//! anything by itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::auth::use_auth;
use crate::components::loading::Loading;
use crate::state::auth::AuthState;

pub const ACCESS_DENIED: &str = "Access Denied: Admin Only";

/// What a guarded route should show for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    RedirectToLogin,
    AccessDenied,
    Render,
}

/// Decision for routes that require any logged-in user.
#[must_use]
pub fn private_route_outcome(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Loading
    } else if !state.is_authenticated() {
        GuardOutcome::RedirectToLogin
    } else {
        GuardOutcome::Render
    }
}

/// Decision for routes that require the admin role.
#[must_use]
pub fn admin_route_outcome(state: &AuthState) -> GuardOutcome {
    match private_route_outcome(state) {
        GuardOutcome::Render if !state.is_admin() => GuardOutcome::AccessDenied,
        outcome => outcome,
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

fn render_outcome(outcome: GuardOutcome, children: &ChildrenFn) -> AnyView {
    match outcome {
        GuardOutcome::Loading => view! { <Loading/> }.into_any(),
        GuardOutcome::RedirectToLogin => view! { <Redirect path="/login" options=replace_options()/> }.into_any(),
        GuardOutcome::AccessDenied => view! {
            <div class="guard-screen">
                <div class="guard-screen__message guard-screen__message--denied">{ACCESS_DENIED}</div>
            </div>
        }
        .into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}

/// Renders children for logged-in users; otherwise waits or goes to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let outcome = Memo::new(move |_| private_route_outcome(&auth.state.get()));
    move || render_outcome(outcome.get(), &children)
}

/// Renders children for admins; logged-in non-admins see an access-denied screen.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let outcome = Memo::new(move |_| admin_route_outcome(&auth.state.get()));
    move || render_outcome(outcome.get(), &children)
}
