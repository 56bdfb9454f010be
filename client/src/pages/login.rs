//! Login page: username + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;

/// Trim the username and require both fields.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed-in visitors have nothing to do here.
    Effect::new(move || {
        let state = auth.state.get();
        if !state.loading && state.is_authenticated() {
            navigate.with_value(|nav| nav("/dashboard", NavigateOptions::default()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        leptos::task::spawn_local(async move {
            match auth.login(username_value, password_value).await {
                Ok(()) => navigate.with_value(|nav| nav("/dashboard", NavigateOptions::default())),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
