use replydraft::config::{ApiConfig, Config, ConfigError, UiConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.copy_notice_ms, 2000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("replydraft/config.toml"));
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://replies.example.com"

[ui]
tick_rate_ms = 100
copy_notice_ms = 1500
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config,
        Config {
            api: ApiConfig {
                base_url: "https://replies.example.com".into(),
            },
            ui: UiConfig {
                tick_rate_ms: 100,
                copy_notice_ms: 1500,
            },
        }
    );
}

#[test]
fn test_missing_sections_use_defaults() {
    let (_dir, path) = write_config("[api]\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_non_http_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"localhost:8080\"\n");
    let result = Config::load_from(&path);
    match result {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("localhost:8080"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_copy_notice_fails_validation() {
    let (_dir, path) = write_config("[ui]\ncopy_notice_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_cli_url_beats_env_url() {
    let config = Config::default()
        .with_overrides(
            Some("http://env.example:1".into()),
            Some("http://cli.example:2".into()),
        )
        .unwrap();
    assert_eq!(config.api.base_url, "http://cli.example:2");
}

#[test]
fn test_env_url_beats_file() {
    let config = Config::default()
        .with_overrides(Some("http://env.example:1".into()), None)
        .unwrap();
    assert_eq!(config.api.base_url, "http://env.example:1");
}

#[test]
fn test_blank_overrides_are_ignored() {
    let config = Config::default()
        .with_overrides(Some("   ".into()), Some(String::new()))
        .unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8080");
}

#[test]
fn test_invalid_override_is_rejected() {
    let result = Config::default().with_overrides(None, Some("ftp://nope".into()));
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
