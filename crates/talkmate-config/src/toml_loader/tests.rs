//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_talkmate_config.toml"));
    assert!(matches!(
        result,
        Err(talkmate_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[api]
text_model = "gemini-1.5-pro"
temperature = 0.2

[logging]
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.text_model, "gemini-1.5-pro");
    assert!((config.api.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.api.vision_model, "gemini-2.0-flash");
    assert_eq!(config.api.max_tokens, 4096);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(talkmate_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_from_path_leaves_validation_to_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nmax_tokens = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.max_tokens, 0);

    let err = crate::load_config_from(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        talkmate_common::ConfigError::ValidationError(ref msg) if msg.contains("api.max_tokens")
    ));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talkmate").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.text_model, "gemini-2.0-flash");
    assert!(config.api.api_key.is_empty());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::TalkmateConfig;

    let config: TalkmateConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.api.text_model, "gemini-2.0-flash");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_talkmate() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("talkmate/config.toml"));
    }
}
