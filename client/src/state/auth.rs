//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The bearer token is the source of truth
//! for "logged in"; the user record may still be loading behind it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the stored token, the resolved user, and whether the
/// user fetch is still in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before browser storage has been consulted. Server renders and the
    /// first hydrated frame both use this so guards show a loading view.
    #[must_use]
    pub fn pending() -> Self {
        Self { token: None, user: None, loading: true }
    }

    /// State right after reading storage. A token means `/users/me` is about
    /// to be fetched, so the state stays loading until it resolves.
    #[must_use]
    pub fn from_stored_token(token: Option<String>) -> Self {
        let loading = token.is_some();
        Self { token, user: None, loading }
    }

    /// A token implies a logged-in user, even before the user record arrives.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::has_admin_role)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.username.clone()).unwrap_or_default()
    }

    pub fn logged_in(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    pub fn user_loaded(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logged_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}
