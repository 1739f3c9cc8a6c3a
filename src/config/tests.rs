//! Tests for config module.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

fn minimal_valid_yaml() -> String {
    r#"
app:
  name: testapp
  env: development
"#
    .to_string()
}

// ==================== YAML field loading tests ====================

#[test]
fn test_load_app_fields() {
    let yaml = r#"
app:
  name: myapp
  env: production
  log_level: debug
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.name, "myapp");
    assert_eq!(cfg.app.env, "production");
    assert_eq!(cfg.app.log_level, Some("debug".to_string()));
}

#[test]
fn test_load_loader_fields() {
    let yaml = r#"
app:
  name: test
  env: dev

loader:
  state_path: /api/bootstrap
  fallback:
    app_name: "Other Name"
    app_version: "9.9.9"
    app_description: "desc"
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.loader.state_path, "/api/bootstrap");
    assert_eq!(cfg.loader.fallback.app_name, Some("Other Name".to_string()));
    assert_eq!(cfg.loader.fallback.app_version, "9.9.9");
    assert_eq!(cfg.loader.fallback.app_description, "desc");
}

#[test]
fn test_load_devserver_fields() {
    let yaml = r#"
app:
  name: test
  env: dev

devserver:
  port: 4000
  path_prefix: /backend
  backend_host: localhost
  backend_port: "8080"
  backend_port_var: API_PORT
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.devserver.port, 4000);
    assert_eq!(cfg.devserver.path_prefix, "/backend");
    assert_eq!(cfg.devserver.backend_host, "localhost");
    assert_eq!(cfg.devserver.backend_port, "8080");
    assert_eq!(cfg.devserver.backend_port_var, "API_PORT");
}

#[test]
fn test_missing_sections_use_defaults() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    assert_eq!(cfg.loader.state_path, "/api/state");
    assert_eq!(cfg.loader.fallback.app_name, None);
    assert_eq!(cfg.loader.fallback.app_version, "0.0.0");
    assert_eq!(cfg.loader.fallback.app_description, "");

    assert_eq!(cfg.devserver.port, 3000);
    assert_eq!(cfg.devserver.path_prefix, "/api");
    assert_eq!(cfg.devserver.backend_host, "127.0.0.1");
    assert_eq!(cfg.devserver.backend_port, "5000");
    assert_eq!(cfg.devserver.backend_port_var, "BACKEND_PORT");
}

// ==================== Defaults resolution tests ====================

#[test]
fn test_fallback_app_name_defaults_to_app_name() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    cfg.apply_defaults();

    assert_eq!(cfg.loader.fallback.app_name, Some("testapp".to_string()));
}

#[test]
fn test_fallback_app_name_explicit_wins() {
    let yaml = r#"
app:
  name: testapp
  env: development

loader:
  fallback:
    app_name: "Pinned Name"
"#;
    let mut cfg = from_yaml(yaml).unwrap();

    cfg.apply_defaults();

    assert_eq!(cfg.loader.fallback.app_name, Some("Pinned Name".to_string()));
}

// ==================== Validation tests ====================

#[test]
fn test_validate_empty_app_name() {
    let yaml = r#"
app:
  name: ""
  env: dev
"#;
    let cfg = from_yaml(yaml).unwrap();

    let result = cfg.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("app.name is required"));
}

#[test]
fn test_validate_empty_env() {
    let yaml = r#"
app:
  name: test
  env: ""
"#;
    let cfg = from_yaml(yaml).unwrap();

    let result = cfg.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("app.env is required"));
}

#[test]
fn test_validate_relative_state_path() {
    let yaml = r#"
app:
  name: test
  env: dev

loader:
  state_path: api/state
"#;
    let cfg = from_yaml(yaml).unwrap();

    let result = cfg.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("state_path must start with '/'"));
}

#[test]
fn test_validate_relative_path_prefix() {
    let yaml = r#"
app:
  name: test
  env: dev

devserver:
  path_prefix: api
"#;
    let cfg = from_yaml(yaml).unwrap();

    let result = cfg.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("path_prefix must start with '/'"));
}

#[test]
fn test_validate_zero_port() {
    let yaml = r#"
app:
  name: test
  env: dev

devserver:
  port: 0
"#;
    let cfg = from_yaml(yaml).unwrap();

    let result = cfg.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("port must be positive"));
}

#[test]
fn test_validate_empty_backend_port_var() {
    let yaml = r#"
app:
  name: test
  env: dev

devserver:
  backend_port_var: ""
"#;
    let cfg = from_yaml(yaml).unwrap();

    let result = cfg.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("backend_port_var is required"));
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let yaml = minimal_valid_yaml();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.app.name, "testapp");
    assert_eq!(cfg.app.env, "development");
    // Fallback app_name is resolved during load
    assert_eq!(cfg.loader.fallback.app_name, Some("testapp".to_string()));

    // APP_NAME overrides app.name, and the override flows into the
    // fallback record too. Kept in the same test to avoid env var
    // conflicts with parallel tests.
    // (unsafe because modifying env is not thread-safe)
    unsafe {
        env::set_var("APP_NAME", "Renamed App");
    }

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.app.name, "Renamed App");
    assert_eq!(cfg.loader.fallback.app_name, Some("Renamed App".to_string()));

    // Cleanup
    unsafe {
        env::remove_var("APP_NAME");
    }
}

#[test]
fn test_load_file_not_found() {
    let result = Config::load("nonexistent_config.yaml");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("failed to read config file"));
}
