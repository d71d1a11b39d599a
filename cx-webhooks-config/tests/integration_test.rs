//! Integration tests for cx-webhooks-config

use cx_webhooks_config::*;
use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_load_from_explicit_env_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "CX_AUTH_ENDPOINT=https://id.example.com/connect/token").unwrap();
    writeln!(file, "CX_CLIENT_ID=integration-client").unwrap();
    writeln!(file, "CX_CLIENT_SECRET=integration-secret").unwrap();
    writeln!(file, "CX_APPLICATION_ID=integration-app").unwrap();
    writeln!(file, "CX_BASE_URL=https://api.example.com/webhooks/v1").unwrap();

    let values = read_env_file(file.path()).unwrap();
    let config = CxConfig::from_loader(&EnvLoader::new(values, HashMap::new())).unwrap();

    assert_eq!(config.oauth.auth_endpoint, "https://id.example.com/connect/token");
    assert_eq!(config.oauth.client_id, "integration-client");
    assert_eq!(config.application_id, "integration-app");
    assert_eq!(config.base_url, "https://api.example.com/webhooks/v1");
}

#[test]
fn test_process_environment_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "CX_AUTH_ENDPOINT=https://id.example.com/token").unwrap();
    writeln!(file, "CX_CLIENT_ID=file-client").unwrap();
    writeln!(file, "CX_CLIENT_SECRET=file-secret").unwrap();
    writeln!(file, "CX_APPLICATION_ID=file-app").unwrap();

    let values = read_env_file(file.path()).unwrap();
    let process: HashMap<String, String> =
        [("CX_APPLICATION_ID".to_string(), "process-app".to_string())]
            .into_iter()
            .collect();

    let config = CxConfig::from_loader(&EnvLoader::new(values, process)).unwrap();
    assert_eq!(config.application_id, "process-app");
    assert_eq!(config.oauth.client_id, "file-client");
}

#[test]
fn test_load_with_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CxConfig::load(Some(&dir.path().join("missing.env")));

    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey("CX_CLIENT_SECRET".to_string());
    let display = format!("{}", err);
    assert!(display.contains("CX_CLIENT_SECRET"));
}
