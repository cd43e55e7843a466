use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, backend_url: None });
    assert_eq!(cfg.client_config().backend_url(), "http://localhost:8000");
}

#[test]
fn parses_port_override() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn blank_port_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert!(err.to_string().contains("invalid PORT"));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn primary_backend_var_wins() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        (BACKEND_URL_VAR, "https://assist.example.com/"),
        (BACKEND_URL_FALLBACK_VAR, "https://other.example.com"),
    ]))
    .unwrap();
    assert_eq!(cfg.client_config().backend_url(), "https://assist.example.com");
}

#[test]
fn fallback_backend_var_used_when_primary_blank() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        (BACKEND_URL_VAR, " "),
        (BACKEND_URL_FALLBACK_VAR, "https://other.example.com"),
    ]))
    .unwrap();
    assert_eq!(cfg.backend_url.as_deref(), Some("https://other.example.com"));
}

