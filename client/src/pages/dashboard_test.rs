use super::*;
use crate::net::types::{ADMIN_ROLE, User};

#[test]
fn profile_lines_for_loaded_user() {
    let mut state = AuthState::default();
    state.logged_in(
        "t".to_owned(),
        User {
            id: 1,
            username: "admin".to_owned(),
            email: "admin@example.com".to_owned(),
            roles: vec!["ROLE_USER".to_owned(), ADMIN_ROLE.to_owned()],
        },
    );
    let (greeting, email, roles) = profile_lines(&state);
    assert_eq!(greeting, "Welcome, admin!");
    assert_eq!(email, "Email: admin@example.com");
    assert_eq!(roles, "Roles: ROLE_USER, ROLE_ADMIN");
}

#[test]
fn profile_lines_before_user_resolves() {
    let state = AuthState::from_stored_token(Some("t".to_owned()));
    let (greeting, email, roles) = profile_lines(&state);
    assert_eq!(greeting, "Welcome, !");
    assert_eq!(email, "Email: ");
    assert_eq!(roles, "Roles: ");
}
