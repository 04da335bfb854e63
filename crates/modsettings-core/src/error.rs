//! Error types for settings envelopes and settings stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`crate::SettingsStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No root directory for settings documents could be determined.
    #[error("could not determine settings root directory")]
    NoSettingsRoot,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module name cannot be used as a storage key (empty, or contains
    /// path separators).
    #[error("invalid module name for storage: {0:?}")]
    InvalidModuleName(String),
}

/// Errors raised while loading, serializing, or saving a settings envelope.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The persisted document is not valid JSON or does not match the
    /// module's properties schema.
    #[error("failed to parse settings document: {0}")]
    Parse(#[source] serde_json::Error),

    /// The envelope could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The document's `name` field names a different module.
    #[error("settings document belongs to module {found:?}, expected {expected:?}")]
    ModuleMismatch { expected: String, found: String },

    /// The module name is not one of the known modules.
    #[error("unknown module: {0:?}")]
    UnknownModule(String),

    /// The settings store failed.  Passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_into_settings_error() {
        // Arrange
        let store_err = StoreError::InvalidModuleName("../evil".to_string());

        // Act
        let err: SettingsError = store_err.into();

        // Assert
        assert!(matches!(
            err,
            SettingsError::Store(StoreError::InvalidModuleName(ref name)) if name == "../evil"
        ));
    }

    #[test]
    fn test_store_error_display_is_transparent() {
        let err = SettingsError::from(StoreError::NoSettingsRoot);
        assert_eq!(err.to_string(), "could not determine settings root directory");
    }

    #[test]
    fn test_module_mismatch_message_names_both_modules() {
        let err = SettingsError::ModuleMismatch {
            expected: "AltDrag".to_string(),
            found: "ImageResizer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AltDrag"));
        assert!(msg.contains("ImageResizer"));
    }
}
