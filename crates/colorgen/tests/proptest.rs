//! Property-based tests for color conversions.

use colorgen::{Color, ErrorKind};
use proptest::prelude::*;

fn hex6() -> impl Strategy<Value = String> {
    "#[0-9a-fA-F]{6}"
}

proptest! {
    /// Six-digit hex strings survive a round trip (case-insensitively).
    #[test]
    fn hex6_round_trip(s in hex6()) {
        let color = Color::from_hex_str(&s).unwrap();
        prop_assert_eq!(color.to_hex_string(true, false), s.to_lowercase());
        prop_assert_eq!(color.a, 255);
    }

    /// Eight-digit hex strings keep their alpha channel.
    #[test]
    fn hex8_round_trip(s in "#[0-9a-f]{8}") {
        let color = Color::from_hex_str(&s).unwrap();
        prop_assert_eq!(color.to_hex_string(true, true), s);
    }

    /// Digits past the eighth never change the parsed value.
    #[test]
    fn trailing_digits_ignored(s in "#[0-9a-f]{8}", extra in "[0-9a-f]{1,6}") {
        let base = Color::from_hex_str(&s).unwrap();
        prop_assert_eq!(Color::from_hex_str(&format!("{}{}", s, extra)).unwrap(), base);
    }

    /// The pound sign never changes the parsed value.
    #[test]
    fn pound_is_optional(s in "[0-9a-f]{6}") {
        let with = Color::from_hex_str(&format!("#{}", s)).unwrap();
        let without = Color::from_hex_str(&s).unwrap();
        prop_assert_eq!(with, without);
    }

    /// Fewer than six digits is always a format error.
    #[test]
    fn short_hex_rejected(s in "#?[0-9a-f]{0,5}") {
        let err = Color::from_hex_str(&s).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);
    }

    /// Any non-hex character is a format error.
    #[test]
    fn non_hex_rejected(prefix in "[0-9a-f]{0,5}", bad in "[g-zG-Z !@$%]", suffix in "[0-9a-f]{0,5}") {
        let s = format!("#{}{}{}", prefix, bad, suffix);
        prop_assert!(Color::from_hex_str(&s).is_err());
    }

    /// Decimal tuples parse back to the same color.
    #[test]
    fn decimal_tuple_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let color = Color::with_alpha(r, g, b, a);
        prop_assert_eq!(Color::from_decimal_tuple(&color.to_decimal_tuple(true)).unwrap(), color);
    }

    /// Channels outside 0-255 are a validation error.
    #[test]
    fn out_of_range_channels_rejected(v in prop_oneof![256i64..10_000, -10_000i64..0]) {
        let err = Color::from_channels(0, v, 0, 255).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
