//! # Behavior Manifest
//!
//! TOML description of the behaviors a firmware build registers.
//!
//! ```toml
//! [validation]
//! max_keyboard_usage = 0x67
//! consumer_usages = "basic"
//!
//! [[behaviors]]
//! name = "key_press"
//! metadata = { type = "standard", param1_domain = "hid_usage", param2_domain = "null" }
//!
//! [[behaviors]]
//! name = "bootloader"
//! ready = false
//! ```
//!
//! Behaviors are registered in file order.

use crate::error::CliError;
use bindcheck_core::{BehaviorDriver, DriverError, ParameterMetadata, Registry, ValidationConfig};
use serde::Deserialize;
use std::path::Path;

/// A behavior declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeclaredBehavior {
    /// Registered name.
    pub name: String,
    /// Whether the behavior's device is ready.
    #[serde(default = "default_ready")]
    pub ready: bool,
    /// Parameter metadata the behavior publishes.
    #[serde(default)]
    pub metadata: Option<ParameterMetadata>,
    /// Simulated driver failure when asked for metadata.
    #[serde(default)]
    pub metadata_error: Option<String>,
}

const fn default_ready() -> bool {
    true
}

impl BehaviorDriver for DeclaredBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn parameter_metadata(&self) -> Result<ParameterMetadata, DriverError> {
        if let Some(reason) = &self.metadata_error {
            return Err(DriverError::MetadataUnavailable {
                reason: reason.clone(),
            });
        }

        self.metadata
            .clone()
            .ok_or_else(|| DriverError::MetadataUnavailable {
                reason: format!("behavior '{}' declares no parameter metadata", self.name),
            })
    }
}

/// The whole manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Domain limits.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Declared behaviors, in registration order.
    #[serde(default)]
    pub behaviors: Vec<DeclaredBehavior>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_toml_str(&text, path)?;

        tracing::info!(
            path = %path.display(),
            behaviors = manifest.behaviors.len(),
            "loaded behavior manifest"
        );
        Ok(manifest)
    }

    /// Build the registry over the declared behaviors.
    #[must_use]
    pub fn registry(&self) -> Registry<'_> {
        Registry::new(self.behaviors.iter().map(|b| b as &dyn BehaviorDriver))
    }
}
