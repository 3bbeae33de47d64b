//! # HID Primitives
//!
//! Fixed constants and the packed HID usage layout.
//!
//! A HID usage is stored in one 32-bit parameter: the usage page in the high
//! 16 bits, the usage id in the low 16 bits.

/// Keyboard/Keypad usage page.
pub const HID_USAGE_KEY: u16 = 0x07;

/// Consumer usage page.
pub const HID_USAGE_CONSUMER: u16 = 0x0C;

/// Highest consumer usage id when only basic consumer usages are reported.
pub const BASIC_CONSUMER_MAX_USAGE: u16 = 0xFF;

/// Highest consumer usage id with the full consumer report.
pub const FULL_CONSUMER_MAX_USAGE: u16 = 0xFFF;

/// Default highest keyboard usage id (Keypad `=`, the end of the basic NKRO report).
pub const DEFAULT_MAX_KEYBOARD_USAGE: u32 = 0x67;

/// Default number of keymap layers.
pub const DEFAULT_KEYMAP_LAYER_COUNT: u32 = 8;

/// Pack a usage page and usage id into one parameter value.
#[must_use]
pub const fn hid_usage(page: u16, id: u16) -> u32 {
    ((page as u32) << 16) | id as u32
}

/// The usage page of a packed usage.
#[must_use]
pub const fn usage_page(usage: u32) -> u16 {
    (usage >> 16) as u16
}

/// The usage id of a packed usage.
#[must_use]
pub const fn usage_id(usage: u32) -> u16 {
    (usage & 0xFFFF) as u16
}
