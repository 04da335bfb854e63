//! `modsettings` — inspect and maintain per-module settings documents.
//!
//! # Usage
//!
//! ```text
//! modsettings [--root <DIR>] <COMMAND>
//!
//! Commands:
//!   list               List known modules and whether each has saved settings
//!   path    <MODULE>   Print the settings file path for a module
//!   show    <MODULE>   Print a module's settings as JSON
//!   init    <MODULE>   Write defaults unless settings already exist
//!   reset   <MODULE>   Overwrite settings with defaults
//!   upgrade <MODULE>   Apply pending schema migrations
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Default                         | Description        |
//! |--------------------|---------------------------------|--------------------|
//! | `MODSETTINGS_ROOT` | `<platform config>/ModSettings` | Settings root      |
//! | `RUST_LOG`         | `info`                          | Log filter         |
//!
//! Logs go to stderr so stdout carries only command output.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use modsettings_cli::commands::{self, Command};
use modsettings_store::JsonFileStore;

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "modsettings",
    about = "Inspect and maintain per-module settings documents",
    version
)]
struct Cli {
    /// Directory holding one sub-directory per module.
    ///
    /// Defaults to the platform config directory.
    #[arg(long, global = true, env = "MODSETTINGS_ROOT")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match cli.root {
        Some(root) => JsonFileStore::new(root),
        None => JsonFileStore::with_default_root()
            .context("no --root given and the platform config directory is unknown")?,
    };
    debug!(root = %store.root().display(), "using settings root");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &store, &mut out)
}
