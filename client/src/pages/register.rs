//! Registration page for `POST /auth/register`.
//!
//! The checks here mirror the API's request constraints so most mistakes are
//! caught before a round trip. The API remains the authority and its message
//! is shown verbatim when it disagrees.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;

pub(crate) const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=20;
pub(crate) const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=40;
pub(crate) const EMAIL_MAX_LEN: usize = 50;
const REDIRECT_NOTICE: &str = "Redirecting to login...";

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated registration fields ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub(crate) fn validate(&self) -> Result<RegisterInput, &'static str> {
        let username = self.username.trim();
        if !USERNAME_LEN.contains(&username.chars().count()) {
            return Err("Username must be between 3 and 20 characters.");
        }
        let email = self.email.trim();
        if email.is_empty() || email.chars().count() > EMAIL_MAX_LEN || !is_plausible_email(email) {
            return Err("Enter a valid email address.");
        }
        if !PASSWORD_LEN.contains(&self.password.chars().count()) {
            return Err("Password must be between 6 and 40 characters.");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.");
        }
        Ok(RegisterInput { username: username.to_owned(), email: email.to_owned(), password: self.password.clone() })
    }
}

/// Banner shown after a successful registration, before the redirect.
pub(crate) fn success_banner(message: &str) -> String {
    format!("{} {REDIRECT_NOTICE}", message.trim())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match form.with_untracked(RegisterForm::validate) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        leptos::task::spawn_local(async move {
            match auth.register(input.username, input.email, input.password).await {
                Ok(message) => {
                    success.set(success_banner(&message));
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    navigate.with_value(|nav| nav("/login", NavigateOptions::default()));
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Register"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">{move || error.get()}</div>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <div class="alert alert--success">{move || success.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
