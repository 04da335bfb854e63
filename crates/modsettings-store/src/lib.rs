//! Storage infrastructure: settings document persistence.
//!
//! This crate is a thin adapter between the settings envelopes in
//! `modsettings-core` and the file system.  It handles:
//!
//! - Resolving the platform-appropriate settings root directory.
//! - Mapping each module name to `<root>/<ModuleName>/settings.json`.
//! - Treating a missing file as "never saved" so callers fall back to
//!   defaults on first run.
//!
//! Keeping file-system concerns here means the envelope code can be tested
//! against an in-memory store and never needs a temp directory.

pub mod file_store;

pub use file_store::{default_settings_root, JsonFileStore, APP_DIR_NAME, SETTINGS_FILE_NAME};
