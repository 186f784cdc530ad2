//! Tests for settings loading and flag overrides.

use std::io::Write;
use strictly_timetravel::{DisplayOrder, Status};
use strictly_timetravel_cli::{Cli, OutputFormat, Settings};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_without_config() {
    let settings = Settings::resolve(&Cli::default()).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(*settings.report_draw());
    assert_eq!(settings.format(), &OutputFormat::Text);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = config_file("reverse_display = true\nformat = \"json\"\n");
    let settings = Settings::from_file(file.path()).unwrap();

    assert!(*settings.reverse_display());
    assert!(*settings.report_draw());
    assert_eq!(settings.format(), &OutputFormat::Json);
    assert_eq!(settings.log_level(), "warn");
}

#[test]
fn test_flags_override_file() {
    let file = config_file("report_draw = true\nlog_level = \"info\"\n");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        no_draw: true,
        log_level: Some("debug".to_string()),
        ..Cli::default()
    };

    let settings = Settings::resolve(&cli).unwrap();
    assert!(!*settings.report_draw());
    assert_eq!(settings.log_level(), "debug");
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = config_file("reverse_display = \"sometimes\"\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_settings_shape_new_session() {
    let cli = Cli {
        reverse: true,
        no_draw: true,
        ..Cli::default()
    };
    let mut session = Settings::resolve(&cli).unwrap().new_session();
    assert_eq!(session.display_order(), DisplayOrder::Reverse);

    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.apply_move(cell).unwrap();
    }
    assert!(matches!(session.current_status(), Status::NextPlayer(_)));
}
