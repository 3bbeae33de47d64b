//! # bindcheck CLI Module
//!
//! ## Available Commands
//!
//! - `validate` - Validate every binding of a keymap (default)
//! - `resolve` - Resolve a behavior name
//! - `audit` - Report duplicate behavior names
//! - `behaviors` - List registered behaviors

mod commands;

use bindcheck::{CliError, Manifest};
use bindcheck_core::audit_uniqueness;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

/// Keymap read by `validate` when no `--keymap` is given.
pub const DEFAULT_KEYMAP: &str = "keymap.toml";

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// bindcheck - keymap behavior binding validator
///
/// Checks that every binding in a keymap names a registered behavior and
/// passes the parameter metadata that behavior publishes.
#[derive(Parser, Debug)]
#[command(name = "bindcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the behavior manifest
    #[arg(short, long, global = true, default_value = "behaviors.toml")]
    pub manifest: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute (defaults to `validate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate every binding of a keymap
    Validate {
        /// Path to the keymap file
        #[arg(short, long, default_value = DEFAULT_KEYMAP)]
        keymap: PathBuf,

        /// Override the layer count (defaults to the keymap's own)
        #[arg(short, long)]
        layers: Option<u32>,
    },

    /// Resolve a behavior name to its registry entry
    Resolve {
        /// Behavior name
        name: String,
    },

    /// Report duplicate behavior names
    Audit,

    /// List registered behaviors
    Behaviors,
}

impl Cli {
    /// The command to run; `validate` with its defaults when none is given.
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Validate {
            keymap: PathBuf::from(DEFAULT_KEYMAP),
            layers: None,
        })
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
///
/// The manifest is loaded and audited once before any command runs.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let manifest = Manifest::load(&cli.manifest)?;
    let registry = manifest.registry();
    let audit = audit_uniqueness(&registry);
    let json_mode = cli.json_mode;

    match cli.command_or_default() {
        Commands::Validate { keymap, layers } => {
            cmd_validate(&registry, &manifest, &keymap, layers, json_mode)
        }
        Commands::Resolve { name } => cmd_resolve(&registry, &name, json_mode),
        Commands::Audit => cmd_audit(&audit, json_mode),
        Commands::Behaviors => cmd_behaviors(&registry, json_mode),
    }
}

// =============================================================================
// TESTS
// =============================================================================
