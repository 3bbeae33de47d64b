//! # Validation Configuration
//!
//! The configured limits that the standard domains check against.
//! All fields default to the values of a stock keyboard build, so a
//! `[validation]` table may set only what it needs.

use crate::primitives::{
    BASIC_CONSUMER_MAX_USAGE, DEFAULT_KEYMAP_LAYER_COUNT, DEFAULT_MAX_KEYBOARD_USAGE,
    FULL_CONSUMER_MAX_USAGE,
};
use serde::{Deserialize, Serialize};

/// Which consumer usages the HID consumer report can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerUsages {
    /// Basic usages only (`0x00..=0xFF`).
    Basic,
    /// The full consumer page (`0x000..=0xFFF`).
    #[default]
    Full,
}

impl ConsumerUsages {
    /// Highest legal consumer usage id.
    #[must_use]
    pub const fn max_usage(self) -> u16 {
        match self {
            Self::Basic => BASIC_CONSUMER_MAX_USAGE,
            Self::Full => FULL_CONSUMER_MAX_USAGE,
        }
    }
}

/// Limits used by the standard parameter domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Number of layers in the keymap; `LayerIndex` must be below it.
    pub keymap_layer_count: u32,
    /// Highest keyboard usage id the keyboard report can carry.
    pub max_keyboard_usage: u32,
    /// Consumer report width.
    pub consumer_usages: ConsumerUsages,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            keymap_layer_count: DEFAULT_KEYMAP_LAYER_COUNT,
            max_keyboard_usage: DEFAULT_MAX_KEYBOARD_USAGE,
            consumer_usages: ConsumerUsages::default(),
        }
    }
}

impl ValidationConfig {
    /// Set the keymap layer count.
    #[must_use]
    pub const fn with_layer_count(mut self, keymap_layer_count: u32) -> Self {
        self.keymap_layer_count = keymap_layer_count;
        self
    }

    /// Set the highest keyboard usage id.
    #[must_use]
    pub const fn with_max_keyboard_usage(mut self, max_keyboard_usage: u32) -> Self {
        self.max_keyboard_usage = max_keyboard_usage;
        self
    }

    /// Set the consumer report width.
    #[must_use]
    pub const fn with_consumer_usages(mut self, consumer_usages: ConsumerUsages) -> Self {
        self.consumer_usages = consumer_usages;
        self
    }

    /// Whether only basic consumer usages are allowed.
    #[must_use]
    pub const fn consumer_usage_limited_to_basic(&self) -> bool {
        matches!(self.consumer_usages, ConsumerUsages::Basic)
    }
}
