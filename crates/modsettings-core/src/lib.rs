//! # modsettings-core
//!
//! Shared library for the utility suite's per-module settings.  Every module
//! (a window-drag tool, an image resizer, ...) persists its configuration as a
//! small JSON document wrapped in a common **envelope**:
//!
//! ```json
//! {
//!   "version": "1",
//!   "name": "AltDrag",
//!   "properties": { ... }
//! }
//! ```
//!
//! This crate has zero dependencies on the file system, UI frameworks, or
//! platform APIs.  Reading and writing bytes is delegated to a
//! [`SettingsStore`] supplied by the caller.
//!
//! # Architecture overview (for beginners)
//!
//! - **`domain`** – The envelope itself ([`SettingsEnvelope`]), the schema
//!   version type, the `{"value": ...}` property wrappers, and the traits
//!   every module implements.
//!
//! - **`modules`** – Concrete property schemas for the modules shipped with
//!   the suite, plus [`ModuleKind`], a registry that lets tooling handle any
//!   module without knowing its properties type.
//!
//! - **`store`** – The [`SettingsStore`] contract and an in-memory
//!   implementation used by tests and tooling.

pub mod domain;
pub mod error;
pub mod modules;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `modsettings_core::SettingsEnvelope` instead of the full module path.
pub use domain::envelope::{
    compact_json, pretty_json, ModuleProperties, ModuleSettings, SerializeFn, SettingsEnvelope,
};
pub use domain::property::{BoolProperty, HotkeySettings, IntProperty, Property, StringProperty};
pub use domain::version::{SchemaVersion, DEFAULT_VERSION};
pub use error::{SettingsError, StoreError};
pub use modules::altdrag::{AltDragProperties, AltDragSettings};
pub use modules::image_resizer::{ImageResizerProperties, ImageResizerSettings};
pub use modules::ModuleKind;
pub use store::{MemoryStore, SettingsStore};
