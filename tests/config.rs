//! Integration tests for configuration loading.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use tempfile::TempDir;

use odymenu::config::Config;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_config_with_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[general]
log_level = "debug"

[api]
base_url = "https://api.example.com"
timeout_secs = 10

[playback]
viewport_threshold = 0.3
carousel_threshold = 0.6
settle_delay_ms = 150
autoplay_muted = false
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.playback.viewport_threshold, 0.3);
    assert_eq!(config.playback.carousel_threshold, 0.6);
    assert_eq!(config.playback.settle_delay_ms, 150);
    assert!(!config.playback.autoplay_muted);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.example.com"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.playback.viewport_threshold, 0.25);
    assert_eq!(config.playback.carousel_threshold, 0.5);
    assert_eq!(config.playback.settle_delay_ms, 100);
    assert!(config.playback.autoplay_muted);
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "not [valid toml");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config::default();
    let rendered = config.to_toml().unwrap();

    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.playback.settle_delay_ms, config.playback.settle_delay_ms);
    assert_eq!(parsed.api.timeout_secs, config.api.timeout_secs);
}
