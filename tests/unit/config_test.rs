//! Unit tests for config file loading.

use std::fs;

use fmghist::Config;
use tempfile::TempDir;

#[test]
fn load_from_reads_a_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[controller]
host = "fmg.example.com"
username = "admin"
adom = "prod"
platform = "FortiGate-60F"
script = "backup"
timeout_secs = 10
allow_invalid_certs = true

[report]
output_dir = "/tmp/reports"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.controller.host.as_deref(), Some("fmg.example.com"));
    assert_eq!(config.controller.username.as_deref(), Some("admin"));
    assert_eq!(config.controller.adom.as_deref(), Some("prod"));
    assert_eq!(config.controller.platform.as_deref(), Some("FortiGate-60F"));
    assert_eq!(config.controller.script.as_deref(), Some("backup"));
    assert_eq!(config.controller.timeout_secs, 10);
    assert!(config.controller.allow_invalid_certs);
    assert_eq!(config.report.output_dir, "/tmp/reports");
}

#[test]
fn load_from_rejects_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid toml [").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn load_from_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.controller.timeout_secs, 30);
    assert_eq!(config.report.output_dir, ".");
}
