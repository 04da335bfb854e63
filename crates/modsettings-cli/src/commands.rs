//! Subcommands of the `modsettings` tool.
//!
//! Every command works on one [`JsonFileStore`] and writes its human-facing
//! output to the supplied writer, so tests can capture it.

use std::io::Write;

use anyhow::Context;
use clap::Subcommand;
use modsettings_core::{ModuleKind, ModuleSettings};
use modsettings_store::JsonFileStore;
use tracing::info;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List known modules and whether each has a saved document.
    List,
    /// Print the path of a module's settings document.
    Path {
        /// Module name, e.g. `AltDrag` (case-insensitive).
        module: ModuleKind,
    },
    /// Print a module's settings (defaults if nothing is saved).
    Show { module: ModuleKind },
    /// Write default settings for a module unless a document already exists.
    Init { module: ModuleKind },
    /// Overwrite a module's settings with defaults.
    Reset { module: ModuleKind },
    /// Apply pending schema migrations and save if anything changed.
    Upgrade { module: ModuleKind },
}

/// Runs `command` against `store`.
///
/// # Errors
///
/// Returns store, parse, and output errors with the module name attached as
/// context.
pub fn run(command: Command, store: &JsonFileStore, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::List => list(store, out),
        Command::Path { module } => {
            let path = store.settings_path(module.name())?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        Command::Show { module } => show(store, module, out),
        Command::Init { module } => init(store, module, out),
        Command::Reset { module } => reset(store, module, out),
        Command::Upgrade { module } => upgrade(store, module, out),
    }
}

fn list(store: &JsonFileStore, out: &mut dyn Write) -> anyhow::Result<()> {
    for kind in ModuleKind::ALL {
        let state = if store.settings_exists(kind.name()) {
            "saved"
        } else {
            "default"
        };
        writeln!(out, "{}\t{state}", kind.name())?;
    }
    Ok(())
}

fn show(store: &JsonFileStore, module: ModuleKind, out: &mut dyn Write) -> anyhow::Result<()> {
    let settings = load(store, module)?;
    writeln!(out, "{}", settings.to_serialized_form()?)?;
    Ok(())
}

fn init(store: &JsonFileStore, module: ModuleKind, out: &mut dyn Write) -> anyhow::Result<()> {
    if store.settings_exists(module.name()) {
        writeln!(out, "{module}: settings already exist")?;
        return Ok(());
    }
    module
        .default_settings()
        .save(store)
        .with_context(|| format!("failed to write default settings for {module}"))?;
    info!(module = module.name(), "default settings written");
    writeln!(out, "{module}: default settings written")?;
    Ok(())
}

fn reset(store: &JsonFileStore, module: ModuleKind, out: &mut dyn Write) -> anyhow::Result<()> {
    module
        .default_settings()
        .save(store)
        .with_context(|| format!("failed to reset settings for {module}"))?;
    info!(module = module.name(), "settings reset to defaults");
    writeln!(out, "{module}: settings reset to defaults")?;
    Ok(())
}

fn upgrade(store: &JsonFileStore, module: ModuleKind, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut settings = load(store, module)?;
    if settings.upgrade_settings_configuration() {
        settings
            .save(store)
            .with_context(|| format!("failed to save upgraded settings for {module}"))?;
        writeln!(out, "{module}: upgraded to version {}", settings.version())?;
    } else {
        writeln!(out, "{module}: up to date (version {})", settings.version())?;
    }
    Ok(())
}

fn load(store: &JsonFileStore, module: ModuleKind) -> anyhow::Result<Box<dyn ModuleSettings>> {
    module
        .load_settings(store)
        .with_context(|| format!("failed to load settings for {module}"))
}
