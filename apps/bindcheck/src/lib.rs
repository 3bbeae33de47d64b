//! # bindcheck
//!
//! Library half of the bindcheck binary: manifest and keymap loading plus
//! keymap-wide validation on top of `bindcheck-core`.

pub mod error;
pub mod keymap;
pub mod manifest;

pub use error::CliError;
pub use keymap::{BindingFailure, Keymap, KeymapBinding, KeymapReport, Layer, validate_keymap};
pub use manifest::{DeclaredBehavior, Manifest};
