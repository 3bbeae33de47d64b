//! # Binding Validator
//!
//! Checks a binding's parameters against the metadata its behavior publishes.
//!
//! 1. Resolve the behavior name through the registry
//! 2. Ask the driver for its parameter metadata
//! 3. Check standard domains (param1 first, param2 only if param1 passed)
//!    or match the custom parameter sets
//!
//! Without the `behavior-metadata` feature every binding is accepted.

use crate::config::ValidationConfig;
use crate::registry::Registry;
use crate::{Binding, ValidationError};

#[cfg(feature = "behavior-metadata")]
use crate::{ParameterMetadata, custom::match_custom, domain::validate_domain};

/// Validates bindings against a registry.
///
/// Holds no state besides its borrowed registry and configuration, so one
/// validator can be shared by any number of callers.
#[derive(Debug, Clone, Copy)]
pub struct BindingValidator<'r, 'a> {
    #[cfg_attr(not(feature = "behavior-metadata"), allow(dead_code))]
    registry: &'r Registry<'a>,
    #[cfg_attr(not(feature = "behavior-metadata"), allow(dead_code))]
    config: ValidationConfig,
}

impl<'r, 'a> BindingValidator<'r, 'a> {
    /// Create a validator over `registry` with the given limits.
    #[must_use]
    pub const fn new(registry: &'r Registry<'a>, config: ValidationConfig) -> Self {
        Self { registry, config }
    }

    /// The limits this validator checks against.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one binding.
    #[cfg(feature = "behavior-metadata")]
    pub fn validate(&self, binding: &Binding<'_>) -> Result<(), ValidationError> {
        let behavior = self.registry.resolve(binding.behavior_dev).ok_or_else(|| {
            ValidationError::UnknownBehavior {
                name: binding.behavior_dev.to_string(),
            }
        })?;

        match behavior.parameter_metadata()? {
            ParameterMetadata::Standard(standard) => {
                validate_domain(standard.param1_domain, binding.param1, &self.config)?;
                validate_domain(standard.param2_domain, binding.param2, &self.config)?;
                Ok(())
            }
            ParameterMetadata::Custom(custom) => match_custom(
                custom.sets.as_deref(),
                binding.param1,
                binding.param2,
                &self.config,
            ),
            ParameterMetadata::Unrecognized => Err(ValidationError::Unsupported),
        }
    }

    /// Validate one binding. Metadata validation is compiled out.
    #[cfg(not(feature = "behavior-metadata"))]
    pub fn validate(&self, _binding: &Binding<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
