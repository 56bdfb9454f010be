//! Authentication context shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` is called once by `App`. It installs an `AuthContext` whose
//! signal starts pending, then (in the browser) restores the stored token and
//! resolves the user behind it. Pages and guards read the signal; forms call
//! `login`/`register`; the navbar calls `logout`.
//!
//! ERROR HANDLING
//! ==============
//! A stored token the API no longer accepts is treated as a logout: the
//! token is dropped and guards fall back to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::util::token_store;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful!";

/// Handle to the auth signal plus the operations that mutate it.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

/// Create the auth context, provide it to descendants, and schedule the
/// stored-token restore for after hydration.
pub fn provide_auth() -> AuthContext {
    let ctx = AuthContext::new();
    provide_context(ctx);
    Effect::new(move || ctx.restore());
    ctx
}

/// Auth context installed by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Whether a `/users/me` result fetched for `token` still applies.
///
/// A logout or a fresh login while the fetch was in flight replaces the
/// token, and the stale user must not be written back.
pub(crate) fn user_fetch_applies(state: &AuthState, token: &str) -> bool {
    state.token.as_deref() == Some(token)
}

/// Success text for a registration: the API's message unless it was blank.
pub(crate) fn registered_message(message: String) -> String {
    if message.trim().is_empty() { REGISTRATION_SUCCEEDED.to_owned() } else { message }
}

impl AuthContext {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::pending()) }
    }

    /// Read the stored token and, if one exists, fetch its user.
    pub fn restore(self) {
        let token = token_store::load_token();
        self.state.set(AuthState::from_stored_token(token.clone()));
        if let Some(token) = token {
            leptos::task::spawn_local(async move { self.refresh_user(token).await });
        }
    }

    /// Resolve the user for `token`; any failure logs out.
    pub async fn refresh_user(self, token: String) {
        match api::fetch_current_user(&token).await {
            Ok(user) => {
                self.state.update(|s| {
                    if user_fetch_applies(s, &token) {
                        s.user_loaded(user);
                    }
                });
            }
            Err(err) => {
                log::error!("error fetching user: {err}");
                if user_fetch_applies(&self.state.get_untracked(), &token) {
                    self.logout();
                }
            }
        }
    }

    /// Log in and persist the issued token.
    ///
    /// # Errors
    ///
    /// Returns the API's message, or `"Login failed"` when it sent none.
    pub async fn login(self, username: String, password: String) -> Result<(), String> {
        match api::login(&username, &password).await {
            Ok(resp) => {
                let (token, user) = resp.into_parts();
                token_store::save_token(&token);
                log::info!("logged in as {}", user.username);
                self.state.update(|s| s.logged_in(token, user));
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                Err(err.user_message(LOGIN_FAILED))
            }
        }
    }

    /// Register a new account. Does not log in.
    ///
    /// Returns the API's success message, or `"Registration successful!"`
    /// when it sent none.
    ///
    /// # Errors
    ///
    /// Returns the API's message, or `"Registration failed"` when it sent none.
    pub async fn register(self, username: String, email: String, password: String) -> Result<String, String> {
        api::register(&username, &email, &password).await.map(registered_message).map_err(|err| {
            log::warn!("registration failed: {err}");
            err.user_message(REGISTRATION_FAILED)
        })
    }

    /// Log out when `err` says the API no longer accepts the token.
    ///
    /// Returns whether the session was dropped. Guards then send the user to
    /// `/login`.
    pub fn expire_if_unauthorized(self, err: &ApiError) -> bool {
        if !err.is_unauthorized() || self.token_untracked().is_none() {
            return false;
        }
        log::warn!("token rejected by API, logging out");
        self.logout();
        true
    }

    /// Drop the token and user.
    pub fn logout(self) {
        token_store::clear_token();
        self.state.update(AuthState::logged_out);
    }

    /// Current token without subscribing to changes.
    #[must_use]
    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
