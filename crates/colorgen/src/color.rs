//! RGBA color value.
//!
//! A [`Color`] has two textual forms:
//!
//! - Hex: `"#ff6b35"` or `"#ff6b35cc"` (pound sign optional, at least 6 digits)
//! - Decimal tuple: `"255,107,53"` or `"255,107,53,204"`
//!
//! # Example
//!
//! ```rust
//! use colorgen::Color;
//!
//! let c = Color::from_hex_str("#FF6B35").unwrap();
//! assert_eq!(c, Color::new(255, 107, 53));
//! assert_eq!(c.to_hex_string(true, false), "#ff6b35");
//! assert_eq!(c.to_decimal_tuple(true), "255,107,53,255");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// An sRGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from wider integers, rejecting channels outside 0-255.
    pub fn from_channels(r: i64, g: i64, b: i64, a: i64) -> Result<Self, ColorError> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
            a: channel("alpha", a)?,
        })
    }

    /// Parses `#rrggbb` or `#rrggbbaa`. The pound sign is optional and
    /// digits are case-insensitive.
    ///
    /// Channels are read as consecutive digit pairs. Alpha is read only when
    /// at least 8 digits are present and defaults to 255 otherwise; digits
    /// past the eighth are not read. Short `#rgb` notation is rejected.
    pub fn from_hex_str(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::hex(s, "contains non-hex characters"));
        }
        if hex.len() < 6 {
            return Err(ColorError::hex(s, "expected at least 6 hex digits"));
        }

        // All bytes are ASCII hex digits, so slicing on pairs is safe.
        let pair = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorError::hex(s, "contains non-hex characters"))
        };
        let a = if hex.len() >= 8 { pair(6)? } else { 255 };
        Ok(Self::with_alpha(pair(0)?, pair(2)?, pair(4)?, a))
    }

    /// Parses `r,g,b` or `r,g,b,a` with decimal channels.
    pub fn from_decimal_tuple(s: &str) -> Result<Self, ColorError> {
        let invalid = |reason: String| ColorError::InvalidTuple {
            value: s.to_string(),
            reason,
        };

        let parts = s
            .split(',')
            .map(|p| {
                let p = p.trim();
                p.parse::<i64>()
                    .map_err(|_| invalid(format!("'{}' is not an integer", p)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [r, g, b] => Self::from_channels(*r, *g, *b, 255),
            [r, g, b, a] => Self::from_channels(*r, *g, *b, *a),
            _ => Err(invalid(format!("expected 3 or 4 components, got {}", parts.len()))),
        }
    }

    /// Renders each channel as two lowercase hex digits, in r,g,b,[a] order.
    pub fn to_hex_string(&self, include_pound: bool, include_alpha: bool) -> String {
        let mut out = String::with_capacity(9);
        if include_pound {
            out.push('#');
        }
        out.push_str(&format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b));
        if include_alpha {
            out.push_str(&format!("{:02x}", self.a));
        }
        out
    }

    /// Renders `"r,g,b"` or `"r,g,b,a"`.
    pub fn to_decimal_tuple(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!("{},{},{},{}", self.r, self.g, self.b, self.a)
        } else {
            format!("{},{},{}", self.r, self.g, self.b)
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
        channel: name,
        value,
    })
}

/// `#rrggbb`, or `#rrggbbaa` for translucent colors.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string(true, !self.is_opaque()))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_str(&s).map_err(serde::de::Error::custom)
    }
}
