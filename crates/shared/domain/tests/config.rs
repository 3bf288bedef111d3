use portal_domain::config::{ApiConfig, ClientConfig, FormConfig, LogConfig};
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let api = ApiConfig::default();
    assert_eq!(api.base_url, "http://localhost:4583");
    assert_eq!(api.timeout(), Duration::from_secs(10));

    let form = FormConfig::default();
    assert_eq!(form.match_debounce(), Duration::from_millis(300));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.directory.is_none());
    assert!(!log.json);
}

#[test]
fn client_config_deserializes_partial_documents() {
    let raw = json!({
        "api": { "base_url": "https://api.example.test" },
        "form": { "match_debounce_ms": 150 }
    });

    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.base_url, "https://api.example.test");
    assert_eq!(cfg.api.timeout_secs, 10);
    assert_eq!(cfg.form.match_debounce_ms, 150);
    assert_eq!(cfg.log, LogConfig::default());
}

#[test]
fn client_config_clones_share_until_mutated() {
    let original = ClientConfig::default();
    let mut copy = original.clone();
    copy.api.base_url = "http://127.0.0.1:9000".to_owned();

    assert_eq!(original.api.base_url, "http://localhost:4583");
    assert_eq!(copy.api.base_url, "http://127.0.0.1:9000");
}
