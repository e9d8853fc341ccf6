//! Config tests: file parsing, layering, and TOML round-trip.

use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.data_file.is_none());
    assert!(config.enable_tui);
    assert!(config.use_theme_background);
    assert!(config.features.analytics);
    assert!(config.features.clipboard);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_empty_file_config_parses() {
    let file: FileConfig = toml::from_str("").unwrap();
    assert!(file.data_file.is_none());
    assert!(file.features.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_file_config_partial_sections() {
    let file: FileConfig = toml::from_str(
        r#"
store_dir = "/tmp/wird-store"

[features]
analytics = false
"#,
    )
    .unwrap();

    assert_eq!(file.store_dir.as_deref(), Some("/tmp/wird-store"));

    // Unset fields fall through to defaults
    let features = Features::from_file(file.features);
    assert!(!features.analytics);
    assert!(features.clipboard);

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "info");
}

#[test]
fn test_file_config_logging_section() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "debug"
file_enabled = true
file_dir = "/tmp/wird-logs"
file_rotation = "hourly"
file_prefix = "custom"
"#,
    )
    .unwrap();

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_dir, PathBuf::from("/tmp/wird-logs"));
    assert_eq!(logging.file_rotation, LogRotation::Hourly);
    assert_eq!(logging.file_prefix, "custom");
}

#[test]
fn test_invalid_rotation_rejected() {
    let result: Result<FileConfig, _> = toml::from_str(
        r#"
[logging]
file_rotation = "weekly"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_to_toml_round_trips() {
    // The generated template must parse back to the same values
    let mut config = Config::default();
    config.data_file = Some(PathBuf::from("/data/duas.json"));
    config.use_theme_background = false;
    config.features.analytics = false;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(file.data_file.as_deref(), Some("/data/duas.json"));
    assert_eq!(file.use_theme_background, Some(false));

    let features = Features::from_file(file.features);
    assert!(!features.analytics);
    assert!(features.clipboard);

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_to_toml_default_data_file_commented() {
    let toml_str = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&toml_str).unwrap();
    assert!(file.data_file.is_none());
}
