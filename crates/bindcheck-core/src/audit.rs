//! # Uniqueness Auditor
//!
//! Start-up check that no two registered behaviors share a name.
//!
//! Duplicate names cannot be rejected when the registry is populated, so
//! they are reported here instead. The audit never fails and never changes
//! the registry: lookups keep returning the first registered match.

use crate::registry::Registry;
use serde::Serialize;

/// Two registry entries with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCollision {
    /// The shared name.
    pub name: String,
    /// Registry index of the earlier entry.
    pub first: usize,
    /// Registry index of the later entry.
    pub second: usize,
}

/// Result of a uniqueness audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Every colliding pair, ordered by `(first, second)`.
    pub collisions: Vec<NameCollision>,
}

impl AuditReport {
    /// True when every name is unique.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Compare every pair of registered names and log each duplicate.
///
/// Readiness is ignored: a not-yet-ready duplicate still collides.
pub fn audit_uniqueness(registry: &Registry<'_>) -> AuditReport {
    let entries = registry.entries();
    let mut report = AuditReport::default();

    for (i, current) in entries.iter().enumerate() {
        for (j, other) in entries.iter().enumerate().skip(i + 1) {
            if current.name() == other.name() {
                tracing::error!(
                    name = current.name(),
                    first = i,
                    second = j,
                    "multiple behaviors have the same name"
                );
                report.collisions.push(NameCollision {
                    name: current.name().to_string(),
                    first: i,
                    second: j,
                });
            }
        }
    }

    report
}
