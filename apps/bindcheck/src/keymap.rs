//! # Keymap Validation
//!
//! Loads a TOML keymap and validates every binding on every layer.
//!
//! ```toml
//! [[layers]]
//! name = "base"
//! bindings = [
//!     { behavior = "key_press", param1 = 0x00070004 },
//!     { behavior = "momentary_layer", param1 = 1 },
//! ]
//! ```
//!
//! A failing binding does not stop the scan; every failure is collected.

use crate::error::CliError;
use bindcheck_core::{Binding, BindingValidator, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One binding as written in the keymap file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeymapBinding {
    /// Behavior name.
    pub behavior: String,
    /// First parameter, `0` when omitted.
    #[serde(default)]
    pub param1: u32,
    /// Second parameter, `0` when omitted.
    #[serde(default)]
    pub param2: u32,
}

impl KeymapBinding {
    /// Borrow as a core binding.
    #[must_use]
    pub fn as_binding(&self) -> Binding<'_> {
        Binding::new(&self.behavior, self.param1, self.param2)
    }
}

/// One keymap layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Layer {
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Bindings in key position order.
    #[serde(default)]
    pub bindings: Vec<KeymapBinding>,
}

/// A keymap file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Keymap {
    /// Layers in index order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Keymap {
    /// Parse a keymap from TOML text.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a keymap file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let keymap = Self::from_toml_str(&text, path)?;

        tracing::info!(
            path = %path.display(),
            layers = keymap.layers.len(),
            "loaded keymap"
        );
        Ok(keymap)
    }

    /// Number of layers, saturated to `u32`.
    #[must_use]
    pub fn layer_count(&self) -> u32 {
        u32::try_from(self.layers.len()).unwrap_or(u32::MAX)
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// A binding that failed validation, with its keymap location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingFailure {
    /// Layer index.
    pub layer: usize,
    /// Layer name, if the keymap gives one.
    pub layer_name: Option<String>,
    /// Key position within the layer.
    pub position: usize,
    /// Behavior name.
    pub behavior: String,
    /// First parameter.
    pub param1: u32,
    /// Second parameter.
    pub param2: u32,
    /// Error category.
    pub kind: &'static str,
    /// Human-readable error.
    pub message: String,
}

/// Outcome of validating a whole keymap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeymapReport {
    /// Number of bindings checked.
    pub checked: usize,
    /// Failing bindings in keymap order.
    pub failures: Vec<BindingFailure>,
}

impl KeymapReport {
    /// True when no binding failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn a failing report into an error.
    pub fn into_result(self) -> Result<Self, CliError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(CliError::InvalidKeymap {
                failed: self.failures.len(),
                checked: self.checked,
            })
        }
    }
}

/// Short category name for a validation error.
#[must_use]
pub fn error_kind(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::UnknownBehavior { .. } => "unknown_behavior",
        ValidationError::MissingMetadata => "missing_metadata",
        ValidationError::Invalid(_) => "invalid",
        ValidationError::Unsupported => "unsupported",
        ValidationError::Driver(_) => "driver",
    }
}

/// Validate every binding of `keymap`.
pub fn validate_keymap(keymap: &Keymap, validator: &BindingValidator<'_, '_>) -> KeymapReport {
    let mut report = KeymapReport::default();

    for (layer_index, layer) in keymap.layers.iter().enumerate() {
        for (position, entry) in layer.bindings.iter().enumerate() {
            report.checked += 1;

            if let Err(error) = validator.validate(&entry.as_binding()) {
                tracing::warn!(
                    layer = layer_index,
                    position,
                    behavior = %entry.behavior,
                    %error,
                    "binding failed validation"
                );
                report.failures.push(BindingFailure {
                    layer: layer_index,
                    layer_name: layer.name.clone(),
                    position,
                    behavior: entry.behavior.clone(),
                    param1: entry.param1,
                    param2: entry.param2,
                    kind: error_kind(&error),
                    message: error.to_string(),
                });
            }
        }
    }

    report
}
