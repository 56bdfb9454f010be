#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_token_is_none_in_non_hydrate_tests() {
    assert_eq!(load_token(), None);
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_token("abc");
    assert_eq!(load_token(), None);
    clear_token();
}

#[test]
fn normalize_token_drops_blank_values() {
    assert_eq!(normalize_token(None), None);
    assert_eq!(normalize_token(Some(String::new())), None);
    assert_eq!(normalize_token(Some("  ".to_owned())), None);
    assert_eq!(normalize_token(Some(" jwt ".to_owned())), Some("jwt".to_owned()));
}
