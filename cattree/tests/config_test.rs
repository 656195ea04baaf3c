//! Integration tests for Settings config loading.
//!
//! Note: These tests run against whatever global config exists on the machine
//! (usually none), so they only assert values set by the explicit config file.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cattree::application::ApplicationError;
use cattree::config::Settings;

fn create_config_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("cattree.toml");
    fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn given_explicit_config_when_load_then_overrides_home_policy() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_config_file(
        &temp,
        r#"
max_depth = 8

[home]
show_all_threshold = 7
fallback_count = 2
"#,
    );

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.max_depth, 8);
    assert_eq!(settings.home.show_all_threshold, 7);
    assert_eq!(settings.home.fallback_count, 2);
}

#[test]
fn given_source_with_env_var_when_load_then_path_expanded() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let home = std::env::var("HOME").unwrap_or_default();
    let path = create_config_file(&temp, "source = \"$HOME/catalog/categories.json\"\n");

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(
        settings.source,
        Some(PathBuf::from(format!("{home}/catalog/categories.json")))
    );
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();

    let result = Settings::load(Some(temp.path().join("nope.toml").as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_config_file(&temp, "[home\nfallback_count = three\n");

    // Act
    let result = Settings::load(Some(path.as_path()));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => assert!(message.contains("parse")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_settings_when_rendered_and_reparsed_then_equal() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_config_file(&temp, "max_depth = 12\n");
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Act
    let rendered = settings.to_toml().unwrap();
    let reparsed: Settings = toml::from_str(&rendered).unwrap();

    // Assert
    assert_eq!(reparsed, settings);
}
