use super::*;
use crate::net::types::{ADMIN_ROLE, User};

fn make_user(roles: &[&str]) -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

fn signed_in(roles: &[&str]) -> AuthState {
    let mut state = AuthState::default();
    state.logged_in("t".to_owned(), make_user(roles));
    state
}

// =============================================================
// PrivateRoute
// =============================================================

#[test]
fn private_route_waits_while_loading() {
    assert_eq!(private_route_outcome(&AuthState::pending()), GuardOutcome::Loading);
    assert_eq!(
        private_route_outcome(&AuthState::from_stored_token(Some("t".to_owned()))),
        GuardOutcome::Loading
    );
}

#[test]
fn private_route_redirects_without_token() {
    assert_eq!(private_route_outcome(&AuthState::default()), GuardOutcome::RedirectToLogin);
}

#[test]
fn private_route_renders_with_token() {
    assert_eq!(private_route_outcome(&signed_in(&["ROLE_USER"])), GuardOutcome::Render);
}

#[test]
fn private_route_renders_with_token_before_user_resolves() {
    let state = AuthState { token: Some("t".to_owned()), user: None, loading: false };
    assert_eq!(private_route_outcome(&state), GuardOutcome::Render);
}

// =============================================================
// AdminRoute
// =============================================================

#[test]
fn admin_route_waits_while_loading() {
    assert_eq!(admin_route_outcome(&AuthState::pending()), GuardOutcome::Loading);
}

#[test]
fn admin_route_redirects_without_token() {
    assert_eq!(admin_route_outcome(&AuthState::default()), GuardOutcome::RedirectToLogin);
}

#[test]
fn admin_route_denies_regular_users() {
    assert_eq!(admin_route_outcome(&signed_in(&["ROLE_USER"])), GuardOutcome::AccessDenied);
}

#[test]
fn admin_route_renders_for_admins() {
    assert_eq!(admin_route_outcome(&signed_in(&["ROLE_USER", ADMIN_ROLE])), GuardOutcome::Render);
}
