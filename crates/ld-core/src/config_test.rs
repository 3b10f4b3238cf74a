use super::*;
use std::collections::HashMap;
use tempfile::tempdir;

const MINIMAL: &str = r#"
looker:
  base_url: https://acme.looker.com:19999
  client_id: abc
  client_secret: xyz
lookml_project: acme
"#;

#[test]
fn test_parse_minimal_config() {
    let config = Config::parse(MINIMAL).unwrap();
    assert_eq!(config.looker.base_url, "https://acme.looker.com:19999");
    assert!(config.looker.verify_ssl);
    assert_eq!(config.looker.timeout, 120);
    assert_eq!(config.looker.api_version, "4.0");
    assert_eq!(config.admin_port, 19999);
    assert_eq!(config.validation_timeout, 600);
    assert_eq!(config.dev_workspace, "dev");
    assert_eq!(config.output_path, "new_broken_content.csv");
    assert_eq!(config.usage.look_id, "4224");
    assert_eq!(config.usage.dashboard_id_field, "dashboard.id");
    assert_eq!(config.usage.run_count_field, "history.dashboard_run_count");
    assert!(!config.usage.include_last_run);
    config.validate().unwrap();
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
looker:
  base_url: https://acme.looker.com:443
  client_id: abc
  client_secret: xyz
  verify_ssl: false
  timeout: 30
  api_version: "4.0"
admin_port: 443
validation_timeout: 900
lookml_project: acme
dev_workspace: dev
output_path: /tmp/report.csv
usage:
  look_id: "17"
  run_count_field: history.count
  include_last_run: true
"#;
    let config = Config::parse(yaml).unwrap();
    assert!(!config.looker.verify_ssl);
    assert_eq!(config.validation_timeout, 900);
    assert_eq!(config.usage.look_id, "17");
    assert_eq!(config.usage.run_count_field, "history.count");
    assert_eq!(config.usage.dashboard_id_field, "dashboard.id");
    assert!(config.usage.include_last_run);
    assert_eq!(config.web_base_url(), "https://acme.looker.com");
}

#[test]
fn test_unknown_fields_rejected() {
    let yaml = format!("{}\nmystery: 1\n", MINIMAL);
    assert!(Config::parse(&yaml).is_err());
}

#[test]
fn test_web_base_url_strips_admin_port() {
    let config = Config::parse(MINIMAL).unwrap();
    assert_eq!(config.web_base_url(), "https://acme.looker.com");
}

#[test]
fn test_web_base_url_strips_path_after_port() {
    let mut config = Config::parse(MINIMAL).unwrap();
    config.looker.base_url = "https://acme.looker.com:19999/".to_string();
    assert_eq!(config.web_base_url(), "https://acme.looker.com");
}

#[test]
fn test_web_base_url_without_port_is_unchanged() {
    let mut config = Config::parse(MINIMAL).unwrap();
    config.looker.base_url = "https://acme.cloud.looker.com".to_string();
    assert_eq!(config.web_base_url(), "https://acme.cloud.looker.com");
}

#[test]
fn test_api_url() {
    let config = Config::parse(MINIMAL).unwrap();
    assert_eq!(config.api_url(), "https://acme.looker.com:19999/api/4.0");
}

#[test]
fn test_overrides_take_precedence() {
    let mut config = Config::parse(MINIMAL).unwrap();
    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_CLIENT_SECRET, "from-env"),
        (ENV_VERIFY_SSL, "false"),
    ]);
    config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.looker.client_secret, "from-env");
    assert_eq!(config.looker.client_id, "abc");
    assert!(!config.looker.verify_ssl);
}

#[test]
fn test_invalid_verify_ssl_override_is_ignored() {
    let mut config = Config::parse(MINIMAL).unwrap();
    config.apply_overrides(|key| (key == ENV_VERIFY_SSL).then(|| "maybe".to_string()));
    assert!(config.looker.verify_ssl);
}

#[test]
fn test_missing_secret_fails_validation() {
    let yaml = r#"
looker:
  base_url: https://acme.looker.com:19999
  client_id: abc
lookml_project: acme
"#;
    let config = Config::parse(yaml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("looker.client_secret"));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::parse(MINIMAL).unwrap();
    config.validation_timeout = 0;
    assert!(matches!(
        config.validate(),
        Err(CoreError::ConfigInvalid { .. })
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_from_dir() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), MINIMAL).unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.lookml_project, "acme");
}
