//! JSON file store: one `settings.json` per module.
//!
//! Layout under the settings root:
//!
//! ```text
//! <root>/
//!   AltDrag/settings.json
//!   ImageResizer/settings.json
//! ```
//!
//! The default root is the platform config directory joined with
//! [`APP_DIR_NAME`]:
//! - Windows:  `%APPDATA%\ModSettings`
//! - Linux:    `~/.config/ModSettings`
//! - macOS:    `~/Library/Application Support/ModSettings`
//!
//! The store writes files in place with no locking.  Concurrent writers to
//! the same module race and the last write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use modsettings_core::{SettingsStore, StoreError};
use tracing::debug;

/// Directory created under the platform config directory.
pub const APP_DIR_NAME: &str = "ModSettings";

/// File name of every module's settings document.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Determines the platform-appropriate settings root.
///
/// # Errors
///
/// Returns [`StoreError::NoSettingsRoot`] when the platform config directory
/// cannot be determined from the environment.
pub fn default_settings_root() -> Result<PathBuf, StoreError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(StoreError::NoSettingsRoot)
}

/// [`SettingsStore`] backed by JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`.  The directory is created lazily on
    /// the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store rooted at [`default_settings_root`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoSettingsRoot`] if the root cannot be resolved.
    pub fn with_default_root() -> Result<Self, StoreError> {
        Ok(Self::new(default_settings_root()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of `module_name`'s settings document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidModuleName`] if the name is empty or would
    /// escape the root directory.
    pub fn settings_path(&self, module_name: &str) -> Result<PathBuf, StoreError> {
        validate_module_name(module_name)?;
        Ok(self.root.join(module_name).join(SETTINGS_FILE_NAME))
    }

    /// `true` if a settings document exists for `module_name`.
    pub fn settings_exists(&self, module_name: &str) -> bool {
        self.settings_path(module_name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Removes `module_name`'s settings document.
    ///
    /// Returns `true` if a file was removed, `false` if none existed.  The
    /// module directory itself is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system errors other than "not
    /// found".
    pub fn delete_settings(&self, module_name: &str) -> Result<bool, StoreError> {
        let path = self.settings_path(module_name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(module = module_name, path = %path.display(), "settings deleted");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn save_settings(&self, serialized: &str, module_name: &str) -> Result<(), StoreError> {
        let path = self.settings_path(module_name)?;

        // Ensure the module directory exists before writing.
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, serialized).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(module = module_name, path = %path.display(), "settings written");
        Ok(())
    }

    fn load_settings(&self, module_name: &str) -> Result<Option<String>, StoreError> {
        let path = self.settings_path(module_name)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(module = module_name, path = %path.display(), "no settings file");
                Ok(None)
            }
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

fn validate_module_name(module_name: &str) -> Result<(), StoreError> {
    let invalid = module_name.is_empty()
        || module_name == "."
        || module_name == ".."
        || module_name.contains(['/', '\\', ':']);
    if invalid {
        Err(StoreError::InvalidModuleName(module_name.to_string()))
    } else {
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_is_module_dir_then_settings_json() {
        let store = JsonFileStore::new("/tmp/settings-root");
        let path = store.settings_path("AltDrag").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/tmp/settings-root")
                .join("AltDrag")
                .join("settings.json")
        );
    }

    #[test]
    fn test_settings_path_rejects_traversal_and_separators() {
        let store = JsonFileStore::new("/tmp/settings-root");
        for bad in ["", ".", "..", "../AltDrag", "a/b", "a\\b", "C:"] {
            assert!(
                matches!(store.settings_path(bad), Err(StoreError::InvalidModuleName(_))),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        // Act
        let loaded = store.load_settings("AltDrag").unwrap();

        // Assert
        assert_eq!(loaded, None);
        assert!(!store.settings_exists("AltDrag"));
    }

    #[test]
    fn test_save_creates_directories_and_writes_text() {
        // Arrange: root does not exist yet
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("root");
        let store = JsonFileStore::new(&root);

        // Act
        store.save_settings("{\n  \"a\": 1\n}", "AltDrag").unwrap();

        // Assert
        let on_disk = fs::read_to_string(root.join("AltDrag").join("settings.json")).unwrap();
        assert_eq!(on_disk, "{\n  \"a\": 1\n}");
        assert!(store.settings_exists("AltDrag"));
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save_settings("first", "AltDrag").unwrap();
        store.save_settings("second", "AltDrag").unwrap();
        assert_eq!(store.load_settings("AltDrag").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_delete_existing_and_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save_settings("{}", "ImageResizer").unwrap();

        assert!(store.delete_settings("ImageResizer").unwrap());
        assert!(!store.settings_exists("ImageResizer"));
        assert!(!store.delete_settings("ImageResizer").unwrap());
    }

    #[test]
    fn test_load_directory_in_place_of_file_is_io_error() {
        // Arrange: settings.json is a directory, so reading it fails with
        // something other than NotFound.
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("AltDrag").join("settings.json")).unwrap();
        let store = JsonFileStore::new(dir.path());

        // Act
        let result = store.load_settings("AltDrag");

        // Assert
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_default_settings_root_ends_with_app_dir() {
        // May be unavailable in a stripped CI environment; that is acceptable.
        if let Ok(root) = default_settings_root() {
            assert!(root.ends_with(APP_DIR_NAME), "got {root:?}");
        }
    }
}
