//! modsettings-cli library crate.
//!
//! The command implementations live here (rather than in `main.rs`) so the
//! integration tests in `tests/` can drive them against a temporary settings
//! root and capture their output.

/// Subcommands and their implementations.
pub mod commands;
