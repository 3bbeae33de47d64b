//! # bindcheck-core
//!
//! Behavior binding resolution and parameter validation - THE LOGIC.
//!
//! A keymap binding names a behavior and carries two 32-bit parameters.
//! This crate resolves the behavior name to its registered driver and
//! checks the parameters against the schema that driver publishes, before
//! the binding is ever invoked.
//!
//! ## Components
//!
//! - `registry` → name resolution over an immutable table of drivers
//! - `domain` → standard domains (null, HID usage, layer index, HSV)
//! - `custom` → OR-of-sets custom schemas
//! - `validator` → resolve, fetch metadata, dispatch
//! - `audit` → start-up duplicate name check
//!
//! ## Architectural Constraints
//!
//! - Synchronous and side-effect free; safe to call from any thread
//! - The registry is populated once and only read afterwards
//! - Nothing is cached: metadata is asked for on every validation

// =============================================================================
// MODULES
// =============================================================================

pub mod audit;
pub mod config;
#[cfg(feature = "behavior-metadata")]
pub mod custom;
#[cfg(feature = "behavior-metadata")]
pub mod domain;
pub mod primitives;
pub mod registry;
pub mod types;
pub mod validator;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    BehaviorDriver, Binding, CustomMetadata, DriverError, InvalidParameter, InvalidPosition,
    ParamPosition, ParameterDomain, ParameterMetadata, ParameterSet, StandardMetadata,
    ValidationError, ValueConstraint, ValueDescriptor,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use audit::{AuditReport, NameCollision, audit_uniqueness};
pub use config::{ConsumerUsages, ValidationConfig};
#[cfg(feature = "behavior-metadata")]
pub use custom::match_custom;
#[cfg(feature = "behavior-metadata")]
pub use domain::validate_domain;
pub use registry::{BehaviorRegistration, Registry};
pub use validator::BindingValidator;
