//! # Registry Module
//!
//! The table of registered behaviors and name resolution.
//!
//! - Built once, never mutated afterwards
//! - Order is registration order; lookups return the first match
//! - Entries whose device is not ready are invisible to lookups

use crate::BehaviorDriver;
use std::fmt;

// =============================================================================
// LINK-TIME REGISTRATION
// =============================================================================

/// A behavior registered at link time with `inventory::submit!`.
///
/// ```ignore
/// static KEY_PRESS: KeyPress = KeyPress;
/// inventory::submit! { BehaviorRegistration::new(&KEY_PRESS) }
/// ```
pub struct BehaviorRegistration {
    driver: &'static dyn BehaviorDriver,
}

impl BehaviorRegistration {
    /// Register a static driver.
    #[must_use]
    pub const fn new(driver: &'static dyn BehaviorDriver) -> Self {
        Self { driver }
    }

    /// The registered driver.
    #[must_use]
    pub fn driver(&self) -> &'static dyn BehaviorDriver {
        self.driver
    }
}

inventory::collect!(BehaviorRegistration);

// =============================================================================
// REGISTRY
// =============================================================================

/// Immutable list of behavior drivers.
#[derive(Clone, Default)]
pub struct Registry<'a> {
    entries: Vec<&'a dyn BehaviorDriver>,
}

impl Registry<'static> {
    /// Build the registry from every `BehaviorRegistration` linked into the binary.
    #[must_use]
    pub fn collected() -> Self {
        Self::new(
            inventory::iter::<BehaviorRegistration>
                .into_iter()
                .map(BehaviorRegistration::driver),
        )
    }
}

impl<'a> Registry<'a> {
    /// Build a registry from drivers, keeping their order.
    pub fn new(entries: impl IntoIterator<Item = &'a dyn BehaviorDriver>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// All entries in registration order, ready or not.
    #[must_use]
    pub fn entries(&self) -> &[&'a dyn BehaviorDriver] {
        &self.entries
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a behavior name to its driver.
    ///
    /// Two passes over the table: first by identity of the name string
    /// (same address and length, as when both sides use the same literal),
    /// then by byte equality. Only ready entries are considered in either
    /// pass. An empty name never resolves.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'a dyn BehaviorDriver> {
        if name.is_empty() {
            return None;
        }

        let ready = || self.entries.iter().copied().filter(|entry| entry.is_ready());

        ready()
            .find(|entry| std::ptr::eq(entry.name(), name))
            .or_else(|| ready().find(|entry| entry.name() == name))
    }

    /// Alias of [`resolve`](Self::resolve).
    #[must_use]
    pub fn get_binding(&self, name: &str) -> Option<&'a dyn BehaviorDriver> {
        self.resolve(name)
    }
}

impl fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.name()))
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
