//! # Domain Validator
//!
//! Checks one parameter value against one standard domain.
//!
//! - `Null`: the value is zero
//! - `HidUsage`: a usage page the HID reports carry, with an id in range
//! - `LayerIndex`: below the keymap layer count
//! - `Hsv`: not checked

use crate::config::ValidationConfig;
use crate::primitives::{HID_USAGE_CONSUMER, HID_USAGE_KEY, usage_id, usage_page};
use crate::{InvalidParameter, ParameterDomain};

/// Validate `value` against `domain`.
pub fn validate_domain(
    domain: ParameterDomain,
    value: u32,
    config: &ValidationConfig,
) -> Result<(), InvalidParameter> {
    match domain {
        ParameterDomain::Null => {
            if value != 0 {
                return Err(InvalidParameter::NonZero { value });
            }
        }
        ParameterDomain::HidUsage => {
            return validate_hid_usage(usage_page(value), usage_id(value), config);
        }
        ParameterDomain::LayerIndex => {
            if value >= config.keymap_layer_count {
                return Err(InvalidParameter::LayerOutOfRange {
                    layer: value,
                    layer_count: config.keymap_layer_count,
                });
            }
        }
        // No bounds are defined for packed HSV values.
        ParameterDomain::Hsv => {}
    }

    Ok(())
}

fn validate_hid_usage(
    page: u16,
    id: u16,
    config: &ValidationConfig,
) -> Result<(), InvalidParameter> {
    tracing::debug!(page, id, "validating HID usage");

    let in_range = match page {
        HID_USAGE_KEY => id != 0 && u32::from(id) <= config.max_keyboard_usage,
        HID_USAGE_CONSUMER => id <= config.consumer_usages.max_usage(),
        _ => {
            tracing::warn!(page, "unsupported HID usage page");
            return Err(InvalidParameter::UnsupportedUsagePage { page });
        }
    };

    if in_range {
        Ok(())
    } else {
        Err(InvalidParameter::UsageIdOutOfRange { page, id })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsumerUsages;
    use crate::primitives::hid_usage;

    fn config() -> ValidationConfig {
        ValidationConfig::default()
            .with_layer_count(4)
            .with_max_keyboard_usage(65)
            .with_consumer_usages(ConsumerUsages::Basic)
    }

    #[test]
    fn null_requires_zero() {
        assert!(validate_domain(ParameterDomain::Null, 0, &config()).is_ok());
        assert_eq!(
            validate_domain(ParameterDomain::Null, 1, &config()),
            Err(InvalidParameter::NonZero { value: 1 })
        );
    }

    #[test]
    fn keyboard_usage_bounds() {
        let cfg = config();
        let check =
            |id| validate_domain(ParameterDomain::HidUsage, hid_usage(HID_USAGE_KEY, id), &cfg);

        assert!(check(1).is_ok());
        assert!(check(65).is_ok());
        assert!(matches!(
            check(66),
            Err(InvalidParameter::UsageIdOutOfRange { id: 66, .. })
        ));
        assert!(matches!(
            check(0),
            Err(InvalidParameter::UsageIdOutOfRange { id: 0, .. })
        ));
    }

    #[test]
    fn consumer_usage_basic_and_full() {
        let basic = config();
        let full = config().with_consumer_usages(ConsumerUsages::Full);
        let usage = |id| hid_usage(HID_USAGE_CONSUMER, id);

        assert!(validate_domain(ParameterDomain::HidUsage, usage(0xFF), &basic).is_ok());
        assert!(validate_domain(ParameterDomain::HidUsage, usage(0x100), &basic).is_err());
        assert!(validate_domain(ParameterDomain::HidUsage, usage(0x100), &full).is_ok());
        assert!(validate_domain(ParameterDomain::HidUsage, usage(0xFFF), &full).is_ok());
        assert!(validate_domain(ParameterDomain::HidUsage, usage(0x1000), &full).is_err());
    }

    #[test]
    fn unknown_page_is_unsupported() {
        for id in [0, 1, 0x20, 0xFFFF] {
            assert_eq!(
                validate_domain(ParameterDomain::HidUsage, hid_usage(0x01, id), &config()),
                Err(InvalidParameter::UnsupportedUsagePage { page: 0x01 })
            );
        }
    }

    #[test]
    fn layer_index_below_count() {
        for layer in 0..4 {
            assert!(validate_domain(ParameterDomain::LayerIndex, layer, &config()).is_ok());
        }
        assert_eq!(
            validate_domain(ParameterDomain::LayerIndex, 4, &config()),
            Err(InvalidParameter::LayerOutOfRange {
                layer: 4,
                layer_count: 4
            })
        );
    }

    #[test]
    fn hsv_is_unconstrained() {
        for value in [0, 1, 0x00FF_FFFF, u32::MAX] {
            assert!(validate_domain(ParameterDomain::Hsv, value, &config()).is_ok());
        }
    }
}
