//! The settings store contract.
//!
//! Envelopes never touch the file system themselves.  Persistence is
//! delegated to a [`SettingsStore`] passed in by the caller, which keeps the
//! envelope testable without real I/O.  The file-backed implementation lives
//! in the `modsettings-store` crate; [`MemoryStore`] here is used by tests and
//! tooling.
//!
//! Stores assume a single reader and a single writer per module.  There is no
//! locking: if two callers load, mutate and save the same module, the last
//! save wins.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::StoreError;

/// Reads and writes serialized settings documents keyed by module name.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Persists `serialized` as the document for `module_name`, replacing any
    /// previous document.
    fn save_settings(&self, serialized: &str, module_name: &str) -> Result<(), StoreError>;

    /// Returns the stored document for `module_name`, or `None` if the module
    /// has never been saved.
    fn load_settings(&self, module_name: &str) -> Result<Option<String>, StoreError>;
}

/// In-memory [`SettingsStore`].
///
/// Uses interior mutability so it satisfies the `&self` store contract.  Not
/// `Sync`; settings access is single-threaded.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<String, String>>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a document, as if it had been saved earlier.
    pub fn with_document(self, module_name: &str, text: &str) -> Self {
        self.documents
            .borrow_mut()
            .insert(module_name.to_string(), text.to_string());
        self
    }

    /// Returns a copy of the stored document for `module_name`.
    pub fn document(&self, module_name: &str) -> Option<String> {
        self.documents.borrow().get(module_name).cloned()
    }

    pub fn contains(&self, module_name: &str) -> bool {
        self.documents.borrow().contains_key(module_name)
    }

    /// Number of successful `save_settings` calls.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl SettingsStore for MemoryStore {
    fn save_settings(&self, serialized: &str, module_name: &str) -> Result<(), StoreError> {
        if module_name.is_empty() {
            return Err(StoreError::InvalidModuleName(module_name.to_string()));
        }
        self.documents
            .borrow_mut()
            .insert(module_name.to_string(), serialized.to_string());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn load_settings(&self, module_name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.document(module_name))
    }
}
