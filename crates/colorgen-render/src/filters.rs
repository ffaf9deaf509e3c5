//! Color filters for templates.
//!
//! Colors reach templates as their canonical hex string (`#rrggbb`, or
//! `#rrggbbaa` when translucent). These filters re-parse that string and
//! render it in the shape a target application expects.
//!
//! | Filter | Example | Output |
//! |--------|---------|--------|
//! | `hex` | `{{ background \| hex }}` | `#222222` |
//! | `hex` | `{{ background \| hex(pound=false, alpha=true) }}` | `222222ff` |
//! | `rgb` / `decimal` | `{{ background \| rgb }}` | `34,34,34` |
//! | `rgb` / `decimal` | `{{ background \| rgb(alpha=true) }}` | `34,34,34,255` |
//! | `channel` | `{{ background \| channel("r") }}` | `34` |

use colorgen::Color;
use minijinja::value::{Kwargs, Value};
use minijinja::{Environment, Error, ErrorKind};

/// Registers the color filters with a MiniJinja environment.
pub fn register_color_filters(env: &mut Environment<'static>) {
    env.add_filter("hex", hex);
    env.add_filter("rgb", decimal);
    env.add_filter("decimal", decimal);
    env.add_filter("channel", channel);
}

fn hex(value: Value, kwargs: Kwargs) -> Result<String, Error> {
    let color = to_color(&value)?;
    let pound = kwargs.get::<Option<bool>>("pound")?.unwrap_or(true);
    let alpha = kwargs.get::<Option<bool>>("alpha")?.unwrap_or(false);
    kwargs.assert_all_used()?;
    Ok(color.to_hex_string(pound, alpha))
}

fn decimal(value: Value, kwargs: Kwargs) -> Result<String, Error> {
    let color = to_color(&value)?;
    let alpha = kwargs.get::<Option<bool>>("alpha")?.unwrap_or(false);
    kwargs.assert_all_used()?;
    Ok(color.to_decimal_tuple(alpha))
}

fn channel(value: Value, name: &str) -> Result<u8, Error> {
    let color = to_color(&value)?;
    match name {
        "r" | "red" => Ok(color.r),
        "g" | "green" => Ok(color.g),
        "b" | "blue" => Ok(color.b),
        "a" | "alpha" => Ok(color.a),
        other => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("unknown color channel '{}' (expected r, g, b or a)", other),
        )),
    }
}

fn to_color(value: &Value) -> Result<Color, Error> {
    let s = value.as_str().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a color, got {} ({})", value.kind(), value),
        )
    })?;
    Color::from_hex_str(s).map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}
