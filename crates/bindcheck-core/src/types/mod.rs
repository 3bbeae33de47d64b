//! # Core Type Definitions
//!
//! This module contains all core types for the binding validation engine:
//! - Keymap bindings (`Binding`)
//! - Parameter schemas (`ParameterDomain`, `StandardMetadata`, `CustomMetadata`)
//! - Custom schema building blocks (`ParamPosition`, `ValueConstraint`, `ValueDescriptor`, `ParameterSet`)
//! - Error types (`ValidationError`, `InvalidParameter`, `DriverError`)
//! - The `BehaviorDriver` trait
//!
//! ## Ownership
//!
//! Parameter metadata is owned by the behavior driver that publishes it.
//! The engine only reads it, once per validation call, and never caches it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// BINDING
// =============================================================================

/// One concrete use of a behavior at a keymap position.
///
/// `behavior_dev` is the registered name of the behavior; it is resolved
/// through the [`Registry`](crate::Registry) on every validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding<'a> {
    /// Name of the behavior this binding invokes.
    pub behavior_dev: &'a str,
    /// First parameter.
    pub param1: u32,
    /// Second parameter.
    pub param2: u32,
}

impl<'a> Binding<'a> {
    /// Create a new binding.
    #[must_use]
    pub const fn new(behavior_dev: &'a str, param1: u32, param2: u32) -> Self {
        Self {
            behavior_dev,
            param1,
            param2,
        }
    }
}

// =============================================================================
// STANDARD DOMAINS
// =============================================================================

/// The closed set of well-known meanings for a 32-bit parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterDomain {
    /// The parameter is unused and must be zero.
    Null,
    /// A packed HID usage page and usage id.
    HidUsage,
    /// An index into the keymap's layers.
    LayerIndex,
    /// A packed hue/saturation/value color. Not range-checked.
    Hsv,
}

/// Independent domains for both parameters of a behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardMetadata {
    /// Domain that `param1` must satisfy.
    pub param1_domain: ParameterDomain,
    /// Domain that `param2` must satisfy.
    pub param2_domain: ParameterDomain,
}

impl StandardMetadata {
    /// Create standard metadata from two domains.
    #[must_use]
    pub const fn new(param1_domain: ParameterDomain, param2_domain: ParameterDomain) -> Self {
        Self {
            param1_domain,
            param2_domain,
        }
    }
}

// =============================================================================
// CUSTOM SCHEMAS
// =============================================================================

/// Which of the two binding parameters a descriptor constrains.
///
/// Serialized as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ParamPosition {
    /// `param1`, position `0`.
    First,
    /// `param2`, position `1`.
    Second,
}

impl ParamPosition {
    /// Both positions, in parameter order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Pick the value at this position out of a parameter pair.
    #[must_use]
    pub const fn select(self, param1: u32, param2: u32) -> u32 {
        match self {
            Self::First => param1,
            Self::Second => param2,
        }
    }
}

/// A parameter position outside `{0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("parameter position must be 0 or 1, got {0}")]
pub struct InvalidPosition(pub u8);

impl TryFrom<u8> for ParamPosition {
    type Error = InvalidPosition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            other => Err(InvalidPosition(other)),
        }
    }
}

impl From<ParamPosition> for u8 {
    fn from(position: ParamPosition) -> Self {
        match position {
            ParamPosition::First => 0,
            ParamPosition::Second => 1,
        }
    }
}

/// The rule a single value descriptor applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueConstraint {
    /// The value must satisfy a standard domain.
    Standard {
        /// Domain to check against.
        domain: ParameterDomain,
    },
    /// The value must equal this literal.
    Exact {
        /// Required value.
        value: u32,
    },
    /// The value must lie in `[min, max]`.
    Range {
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },
}

/// A constraint tagged with the parameter position it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueDescriptor {
    /// Parameter this descriptor constrains.
    pub position: ParamPosition,
    /// The rule itself.
    #[serde(flatten)]
    pub constraint: ValueConstraint,
}

impl ValueDescriptor {
    /// Descriptor requiring a standard domain at `position`.
    #[must_use]
    pub const fn standard(position: ParamPosition, domain: ParameterDomain) -> Self {
        Self {
            position,
            constraint: ValueConstraint::Standard { domain },
        }
    }

    /// Descriptor requiring exactly `value` at `position`.
    #[must_use]
    pub const fn exact(position: ParamPosition, value: u32) -> Self {
        Self {
            position,
            constraint: ValueConstraint::Exact { value },
        }
    }

    /// Descriptor requiring a value in `[min, max]` at `position`.
    #[must_use]
    pub const fn range(position: ParamPosition, min: u32, max: u32) -> Self {
        Self {
            position,
            constraint: ValueConstraint::Range { min, max },
        }
    }
}

/// One alternative: descriptors for either position, in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Descriptors of this set.
    #[serde(default)]
    pub values: Vec<ValueDescriptor>,
}

impl ParameterSet {
    /// Create a set from its descriptors.
    #[must_use]
    pub fn new(values: Vec<ValueDescriptor>) -> Self {
        Self { values }
    }
}

/// An OR of parameter sets. A binding is legal if it matches any one set.
///
/// `sets` is `None` when a behavior declares a custom schema but publishes
/// no sets at all; that is reported as `MissingMetadata`, not as a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomMetadata {
    /// Alternative parameter sets, tried in order.
    #[serde(default)]
    pub sets: Option<Vec<ParameterSet>>,
}

impl CustomMetadata {
    /// Create custom metadata from its alternative sets.
    #[must_use]
    pub fn new(sets: Vec<ParameterSet>) -> Self {
        Self { sets: Some(sets) }
    }

    /// Custom metadata that declares no sets.
    #[must_use]
    pub const fn missing() -> Self {
        Self { sets: None }
    }
}

/// The full validation contract published by one behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterMetadata {
    /// One standard domain per parameter.
    Standard(StandardMetadata),
    /// Alternative custom parameter sets.
    Custom(CustomMetadata),
    /// A metadata type this engine does not know.
    #[serde(other)]
    Unrecognized,
}

// =============================================================================
// BEHAVIOR DRIVER TRAIT
// =============================================================================

/// The handler behind a registered behavior name.
///
/// The engine never invokes a behavior; it only asks for its name, whether
/// its backing device is ready, and which parameters it accepts.
///
/// Drivers must be `Send + Sync`: the registry is shared read-only between
/// all validation callers.
pub trait BehaviorDriver: Send + Sync {
    /// The registered name of this behavior.
    fn name(&self) -> &str;

    /// Whether the backing device finished initialising.
    ///
    /// Entries that are not ready are skipped during resolution.
    fn is_ready(&self) -> bool {
        true
    }

    /// The parameter schema this behavior accepts.
    fn parameter_metadata(&self) -> Result<ParameterMetadata, DriverError>;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors returned by [`BindingValidator::validate`](crate::BindingValidator::validate).
///
/// - No retries: every check is deterministic
/// - Driver errors are passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name did not resolve to any ready registered behavior.
    #[error("Unknown behavior: '{name}'")]
    UnknownBehavior {
        /// The name that failed to resolve.
        name: String,
    },

    /// A custom schema was declared without any parameter sets.
    #[error("Custom parameter metadata has no parameter sets")]
    MissingMetadata,

    /// A parameter failed its domain, exact or range check.
    #[error("Invalid parameter: {0}")]
    Invalid(#[from] InvalidParameter),

    /// The behavior published a metadata type this engine does not understand.
    #[error("Unsupported parameter metadata type")]
    Unsupported,

    /// The behavior driver failed to provide its metadata.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Why a parameter value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    /// A `Null` parameter was not zero.
    #[error("expected 0, got {value}")]
    NonZero {
        /// The offending value.
        value: u32,
    },

    /// The usage id is outside the legal range of its page.
    #[error("usage id {id:#06x} is out of range for usage page {page:#04x}")]
    UsageIdOutOfRange {
        /// HID usage page.
        page: u16,
        /// HID usage id.
        id: u16,
    },

    /// The usage page is not one the HID reports can carry.
    #[error("unsupported HID usage page {page:#04x}")]
    UnsupportedUsagePage {
        /// HID usage page.
        page: u16,
    },

    /// The layer index does not exist in the keymap.
    #[error("layer {layer} does not exist (keymap has {layer_count} layers)")]
    LayerOutOfRange {
        /// Requested layer.
        layer: u32,
        /// Number of layers in the keymap.
        layer_count: u32,
    },

    /// No custom parameter set accepted the pair.
    #[error("no parameter set accepts ({param1}, {param2})")]
    NoMatchingSet {
        /// First parameter.
        param1: u32,
        /// Second parameter.
        param2: u32,
    },
}

/// Errors a behavior driver may report from its metadata query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The backing device is not ready to answer.
    #[error("Behavior device '{name}' is not ready")]
    NotReady {
        /// Behavior name.
        name: String,
    },

    /// The driver could not produce its metadata.
    #[error("Parameter metadata unavailable: {reason}")]
    MetadataUnavailable {
        /// Driver-supplied reason.
        reason: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================
