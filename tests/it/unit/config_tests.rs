//! Config loading and validation tests.

use macroboard::config::Config;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.zoom_limit, 8);
    assert_eq!(config.zoom_speed, 0.06);
    assert_eq!(config.surface_min_size, (600.0, 600.0));
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"{ "zoom_limit": 5, "zoom_speed": 0.1, "surface_min_size": [800.0, 500.0] }"#,
    );
    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.zoom_limit, 5);
    assert_eq!(config.zoom_speed, 0.1);
    assert_eq!(config.surface_min_size, (800.0, 500.0));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config(r#"{ "zoom_limit": 3 }"#);
    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.zoom_limit, 3);
    assert_eq!(config.zoom_speed, Config::default().zoom_speed);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let file = write_config(r#"{ "zoom_limit": 0, "zoom_speed": 3.5 }"#);
    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.zoom_limit, 1);
    assert_eq!(config.zoom_speed, Config::default().zoom_speed);
}

#[test]
fn test_negative_zoom_speed_is_replaced() {
    let config = Config {
        zoom_speed: -0.5,
        ..Config::default()
    }
    .validated();
    assert_eq!(config.zoom_speed, Config::default().zoom_speed);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let file = write_config("{ not json");
    assert!(Config::load_from(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from(&dir.path().join("nope.json")).is_err());
}
