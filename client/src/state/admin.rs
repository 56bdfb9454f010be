//! User-listing state for the admin panel.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::UserRecord;

pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";

/// Admin listing starts in the loading state; the page fetches on mount.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminState {
    pub users: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self { users: Vec::new(), loading: true, error: None }
    }
}

impl AdminState {
    pub fn loaded(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Previously loaded rows are kept.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
