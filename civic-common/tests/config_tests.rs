//! Configuration loading and database path resolution
//!
//! Tests that touch `CIVIC_DATABASE_PATH` are `#[serial]` so they do not race
//! on the process environment.

use civic_common::config::{
    default_database_path, load_config, load_toml_config, resolve_database_path, ConfigSource,
    TomlConfig, DATABASE_PATH_ENV,
};
use civic_common::Error;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_load_full_toml_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        database_path = "/srv/civic/civic_tracker.db"
        bind_address = "0.0.0.0:8080"

        [logging]
        level = "debug"

        [ingest]
        zip_codes = ["11354", "90210"]
        request_delay_ms = 250
        gemini_model = "gemini-1.5-pro"
        gemini_api_key = "test-key"
        "#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();
    assert_eq!(
        config.database_path,
        Some(PathBuf::from("/srv/civic/civic_tracker.db"))
    );
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.ingest.zip_codes, vec!["11354", "90210"]);
    assert_eq!(config.ingest.request_delay_ms, 250);
    assert_eq!(config.ingest.gemini_model, "gemini-1.5-pro");
    assert_eq!(config.ingest.gemini_api_key.as_deref(), Some("test-key"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "bind_address = [not valid").unwrap();

    let result = load_toml_config(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_config_file_is_reported_as_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "bind_address = \"0.0.0.0:8080\"\n").unwrap();

    let (config, source) = load_config(Some(&path)).unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(source, ConfigSource::File(path));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempdir().unwrap();
    let result = load_config(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_cli_path_wins_over_everything() {
    env::set_var(DATABASE_PATH_ENV, "/tmp/from-env.db");
    let config = TomlConfig {
        database_path: Some(PathBuf::from("/tmp/from-toml.db")),
        ..Default::default()
    };

    let path = resolve_database_path(Some(Path::new("/tmp/from-cli.db")), &config);
    assert_eq!(path, PathBuf::from("/tmp/from-cli.db"));

    env::remove_var(DATABASE_PATH_ENV);
}

#[test]
#[serial]
fn test_env_path_wins_over_toml() {
    env::set_var(DATABASE_PATH_ENV, "/tmp/from-env.db");
    let config = TomlConfig {
        database_path: Some(PathBuf::from("/tmp/from-toml.db")),
        ..Default::default()
    };

    let path = resolve_database_path(None, &config);
    assert_eq!(path, PathBuf::from("/tmp/from-env.db"));

    env::remove_var(DATABASE_PATH_ENV);
}

#[test]
#[serial]
fn test_toml_path_then_default() {
    env::remove_var(DATABASE_PATH_ENV);

    let config = TomlConfig {
        database_path: Some(PathBuf::from("/tmp/from-toml.db")),
        ..Default::default()
    };
    assert_eq!(
        resolve_database_path(None, &config),
        PathBuf::from("/tmp/from-toml.db")
    );

    let path = resolve_database_path(None, &TomlConfig::default());
    assert_eq!(path, default_database_path());
    assert!(path.ends_with("civic_tracker.db"));
}
