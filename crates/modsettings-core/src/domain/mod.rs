//! Domain types for module settings.
//!
//! Pure data and rules: nothing in here touches the file system.  The
//! infrastructure that reads and writes documents depends on these types,
//! never the other way round.

/// The versioned settings envelope and the per-module traits.
pub mod envelope;

/// `{"value": ...}` property wrappers and hotkey records.
pub mod property;

/// Schema version strings.
pub mod version;
