use super::*;
use crate::net::types::RoleRecord;

fn make_record(id: i64) -> UserRecord {
    UserRecord {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        roles: vec![RoleRecord { id: Some(1), name: "USER".to_owned() }],
    }
}

#[test]
fn admin_state_starts_loading() {
    let state = AdminState::default();
    assert!(state.loading);
    assert!(state.users.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn loaded_replaces_rows_and_clears_error() {
    let mut state = AdminState::default();
    state.failed(FETCH_USERS_FAILED);
    state.loaded(vec![make_record(1), make_record(2)]);
    assert!(!state.loading);
    assert_eq!(state.users.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn failed_keeps_rows_and_sets_error() {
    let mut state = AdminState::default();
    state.loaded(vec![make_record(1)]);
    state.failed(FETCH_USERS_FAILED);
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch users"));
    assert!(!state.loading);
}
