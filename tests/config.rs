//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use std::path::PathBuf;

use quill::config::EditorConfig;
use quill::config_paths;
use quill::{Dictionary, EditorEngine};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_quill() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("quill"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_and_dictionary_are_under_config_dir() {
    let config = config_paths::config_dir().unwrap();
    assert!(config_paths::logs_dir().unwrap().starts_with(&config));
    assert!(config_paths::default_dictionary_file()
        .unwrap()
        .starts_with(&config));
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_editor_config_default() {
    let config = EditorConfig::default();
    assert_eq!(config.history_limit, 1000);
    assert_eq!(config.dictionary, None);
    assert!(config.spell_check_on_edit);
}

#[test]
fn test_editor_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        history_limit: 25,
        dictionary: Some("/usr/share/dict/words".into()),
        spell_check_on_edit: false,
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_editor_config_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "history_limit: 5\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.history_limit, 5);
    assert!(config.spell_check_on_edit);
    assert_eq!(config.dictionary, None);
}

#[test]
fn test_editor_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_editor_config_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "history_limit: [not a number\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_explicit_dictionary_path_wins() {
    let config = EditorConfig {
        dictionary: Some("words.txt".into()),
        ..EditorConfig::default()
    };
    assert_eq!(config.dictionary_path(), Some(PathBuf::from("words.txt")));
}

#[test]
fn test_engine_from_config() {
    let config = EditorConfig {
        history_limit: 1,
        dictionary: None,
        spell_check_on_edit: false,
    };
    let mut engine = EditorEngine::from_config(&config, Dictionary::new());
    engine.insert('a');
    engine.insert('b');
    assert!(engine.misspelled().is_empty());

    engine.undo();
    engine.undo();
    assert_eq!(engine.text(), "a");
}
