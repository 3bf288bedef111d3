use portal_kernel::config::{ConfigError, environment, load_config, load_config_with};
use portal_kernel::domain::config::ClientConfig;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Environment layer that ignores the real process environment.
fn isolated() -> config::Environment {
    environment().source(Some(config::Map::new()))
}

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write config file");
    path
}

#[test]
fn loads_toml_document() -> Result<(), ConfigError> {
    let dir = tempdir().expect("temp dir");
    let path = write(
        dir.path(),
        "client.toml",
        r#"
        [api]
        base_url = "https://api.example.test"
        timeout_secs = 3

        [form]
        match_debounce_ms = 120
        "#,
    );

    let cfg: ClientConfig = load_config_with(Some(&path), isolated())?;
    assert_eq!(cfg.api.base_url, "https://api.example.test");
    assert_eq!(cfg.api.timeout_secs, 3);
    assert_eq!(cfg.form.match_debounce_ms, 120);
    assert_eq!(cfg.log.level, "info");
    Ok(())
}

#[test]
fn environment_overrides_file_values() -> Result<(), ConfigError> {
    let dir = tempdir().expect("temp dir");
    let path = write(dir.path(), "client.toml", "[api]\nbase_url = \"http://from-file\"\n");

    let mut vars = config::Map::new();
    vars.insert("PORTAL__API__BASE_URL".to_owned(), "http://from-env".to_owned());
    vars.insert("PORTAL__FORM__MATCH_DEBOUNCE_MS".to_owned(), "50".to_owned());
    vars.insert("UNRELATED__API__BASE_URL".to_owned(), "http://ignored".to_owned());

    let cfg: ClientConfig = load_config_with(Some(&path), environment().source(Some(vars)))?;
    assert_eq!(cfg.api.base_url, "http://from-env");
    assert_eq!(cfg.form.match_debounce_ms, 50);
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let result = load_config::<ClientConfig>(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
}

#[test]
fn mistyped_values_are_reported() {
    let dir = tempdir().expect("temp dir");
    let path = write(dir.path(), "client.toml", "[form]\nmatch_debounce_ms = \"soon\"\n");

    let err = load_config_with::<ClientConfig>(Some(&path), isolated())
        .expect_err("string debounce must be rejected");
    assert!(err.to_string().contains("Failed to deserialize config"), "unexpected: {err}");
}
