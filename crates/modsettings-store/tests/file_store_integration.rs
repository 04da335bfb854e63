//! Integration tests: settings envelopes persisted through the file store.

use std::fs;

use modsettings_core::{AltDragSettings, ImageResizerSettings, ModuleKind, SettingsError};
use modsettings_store::JsonFileStore;

#[test]
fn test_first_run_loads_defaults_without_creating_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let settings = AltDragSettings::load(&store).unwrap();

    assert_eq!(settings, AltDragSettings::new());
    assert!(!store.settings_exists("AltDrag"));
}

#[test]
fn test_saved_file_contains_exact_serialized_form() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let mut settings = ImageResizerSettings::new();
    settings.properties_mut().jpeg_quality_level.value = 70;

    // Act
    settings.save(&store).unwrap();

    // Assert
    let path = store.settings_path("ImageResizer").unwrap();
    let on_disk = fs::read_to_string(path).unwrap();
    assert_eq!(on_disk, settings.to_serialized_form().unwrap());

    let json: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(json["name"], "ImageResizer");
    assert_eq!(json["properties"]["imageresizer_jpegQualityLevel"]["value"], 70);
}

#[test]
fn test_save_then_load_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let mut settings = AltDragSettings::new();
    settings.properties_mut().zone_color.value = "#112233".to_string();
    settings.save(&store).unwrap();

    let reloaded = AltDragSettings::load(&store).unwrap();

    assert_eq!(reloaded, settings);
}

#[test]
fn test_hand_edited_corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let path = store.settings_path("AltDrag").unwrap();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ \"version\": \"1\", ").unwrap();

    let result = AltDragSettings::load(&store);

    assert!(matches!(result, Err(SettingsError::Parse(_))));
}

#[test]
fn test_each_module_gets_its_own_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    for kind in ModuleKind::ALL {
        kind.default_settings().save(&store).unwrap();
    }

    assert!(dir.path().join("AltDrag").join("settings.json").is_file());
    assert!(dir.path().join("ImageResizer").join("settings.json").is_file());
}
