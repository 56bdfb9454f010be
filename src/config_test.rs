use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// HostConfig
// =============================================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8081"),
        ("BIND_ADDR", "127.0.0.1"),
        ("CORS_ALLOW_ANY", "yes"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
    assert!(cfg.cors_allow_any);
}

#[test]
fn from_lookup_accepts_ipv6_bind() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: 70000");
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = HostConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_owned()));
}

#[test]
fn from_lookup_rejects_bad_bool() {
    let err = HostConfig::from_lookup(lookup_from(&[("CORS_ALLOW_ANY", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBool { var: "CORS_ALLOW_ANY", value: "maybe".to_owned() });
}

#[test]
fn blank_port_falls_back_to_default() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
