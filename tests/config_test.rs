// Integration tests for configuration-file loading.

use std::io::Write;

use cloudasset::config::{ClientConfig, DEFAULT_PORT, DEFAULT_SCOPE};

#[test]
fn test_yaml_overrides_applied_over_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "endpoint: asset.example.test").unwrap();
    writeln!(file, "lib_name: inventory-tool").unwrap();
    writeln!(file, "lib_version: 2.3.1").unwrap();

    let config = ClientConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.endpoint, "asset.example.test");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.scopes, vec![DEFAULT_SCOPE.to_string()]);
    assert!(config.api_client_header().ends_with(" inventory-tool/2.3.1"));
}

#[test]
fn test_empty_overrides_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{}}").unwrap();

    let config = ClientConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_missing_file_reports_path() {
    let err = ClientConfig::from_yaml_file("/nonexistent/cloudasset.yml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/cloudasset.yml"));
}

#[test]
fn test_malformed_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port: not-a-number").unwrap();

    assert!(ClientConfig::from_yaml_file(file.path()).is_err());
}
