//! # Custom Schema Matcher
//!
//! Evaluates a parameter pair against an OR of parameter sets.
//!
//! Within one set, each position is checked on its own:
//! - a position with at least one descriptor is satisfied when any of them matches
//! - a position with no descriptors is satisfied only by the value `0`
//!
//! A set matches when both positions are satisfied. Sets are tried in order
//! and the first full match wins.

use crate::config::ValidationConfig;
use crate::domain::validate_domain;
use crate::{InvalidParameter, ParamPosition, ParameterSet, ValidationError, ValueConstraint};

/// Match `(param1, param2)` against alternative parameter sets.
///
/// Returns `MissingMetadata` when `sets` is `None`, and
/// `Invalid(NoMatchingSet)` when no set accepts the pair.
pub fn match_custom(
    sets: Option<&[ParameterSet]>,
    param1: u32,
    param2: u32,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let sets = sets.ok_or(ValidationError::MissingMetadata)?;

    if sets
        .iter()
        .any(|set| set_matches(set, param1, param2, config))
    {
        Ok(())
    } else {
        Err(InvalidParameter::NoMatchingSet { param1, param2 }.into())
    }
}

/// Per-position state while scanning one set.
#[derive(Debug, Clone, Copy, Default)]
struct PositionState {
    had_metadata: bool,
    matched: bool,
    satisfied: bool,
}

fn set_matches(set: &ParameterSet, param1: u32, param2: u32, config: &ValidationConfig) -> bool {
    ParamPosition::ALL.into_iter().all(|position| {
        let value = position.select(param1, param2);
        scan_position(set, position, value, config).satisfied
    })
}

fn scan_position(
    set: &ParameterSet,
    position: ParamPosition,
    value: u32,
    config: &ValidationConfig,
) -> PositionState {
    let mut state = PositionState::default();

    for descriptor in set.values.iter().filter(|d| d.position == position) {
        state.had_metadata = true;
        if constraint_matches(&descriptor.constraint, value, config) {
            state.matched = true;
            break;
        }
    }

    state.satisfied = state.matched || (!state.had_metadata && value == 0);
    state
}

fn constraint_matches(
    constraint: &ValueConstraint,
    value: u32,
    config: &ValidationConfig,
) -> bool {
    match *constraint {
        ValueConstraint::Standard { domain } => validate_domain(domain, value, config).is_ok(),
        ValueConstraint::Exact { value: expected } => value == expected,
        ValueConstraint::Range { min, max } => (min..=max).contains(&value),
    }
}

// =============================================================================
// TESTS
// =============================================================================
