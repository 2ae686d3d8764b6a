//! Loading settings from TOML files.

use std::io::Write;
use strictly_mastermind::Difficulty;
use strictly_mastermind_cli::Settings;
use tempfile::NamedTempFile;

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_load_full_settings() {
    let file = settings_file(
        r#"
seed = 42

[session]
difficulty = "hard"
num_colors = 6
max_guesses = 8
seed_rows = 3
"#,
    );

    let settings = Settings::from_file(file.path()).expect("valid settings");
    assert_eq!(*settings.seed(), Some(42));
    assert_eq!(*settings.session().difficulty(), Difficulty::Hard);
    assert_eq!(*settings.session().num_colors(), 6);
    assert_eq!(*settings.session().max_guesses(), 8);
    assert_eq!(*settings.session().seed_rows(), 3);
    assert_eq!(*settings.session().seed_attempts(), 100);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = settings_file("");
    let settings = Settings::from_file(file.path()).expect("valid settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_invalid_color_count_rejected() {
    let file = settings_file("[session]\nnum_colors = 3\n");
    let err = Settings::from_file(file.path()).expect_err("too few colors");
    assert!(err.message.contains("Color count"));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = settings_file("[session\n");
    let err = Settings::from_file(file.path()).expect_err("bad toml");
    assert!(err.message.starts_with("Failed to parse settings"));
}

#[test]
fn test_missing_file_rejected() {
    let err = Settings::from_file("/nonexistent/mastermind.toml").expect_err("missing file");
    assert!(err.message.starts_with("Failed to read settings file"));
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(Settings::load(None).expect("defaults"), Settings::default());
}
