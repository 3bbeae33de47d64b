//! # CLI Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the bindcheck binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A manifest or keymap file could not be read.
    #[error("I/O error reading '{}': {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A manifest or keymap file is not valid TOML for its schema.
    #[error("Invalid TOML in '{}': {source}", path.display())]
    Config {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },

    /// A name passed on the command line did not resolve.
    #[error("Behavior '{0}' is not registered or not ready")]
    NotFound(String),

    /// At least one keymap binding failed validation.
    #[error("{failed} of {checked} bindings failed validation")]
    InvalidKeymap {
        /// Number of failing bindings.
        failed: usize,
        /// Number of bindings checked.
        checked: usize,
    },
}
