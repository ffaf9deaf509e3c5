//! Terminal swatches for `colorgen preview`.
//!
//! Colors are approximated with the 256-color palette. When stdout is not a
//! terminal, `console` drops the styling and only the hex values remain.

use std::io::Write;

use anyhow::Result;
use colorgen::{Color, Colorscheme};
use console::Style;

const SWATCH: &str = "      ";

/// Channel values of the xterm 6x6x6 color cube (indices 16-231).
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Picks the closest xterm palette entry, cube or grayscale ramp (232-255).
fn palette_index(color: Color) -> u8 {
    let (r, g, b) = color.rgb();
    let level = |v: u8| {
        (0..CUBE_LEVELS.len())
            .min_by_key(|&i| (CUBE_LEVELS[i] as i32 - v as i32).abs())
            .unwrap_or(0)
    };
    let (ri, gi, bi) = (level(r), level(g), level(b));
    let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);

    // Gray ramp steps are 8, 18, ..., 238.
    let avg = (r as i32 + g as i32 + b as i32) / 3;
    let step = ((avg - 8 + 5) / 10).clamp(0, 23);
    let gray = (8 + 10 * step) as u8;

    let distance = |(cr, cg, cb): (u8, u8, u8)| {
        let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2);
        d(r, cr) + d(g, cg) + d(b, cb)
    };
    if distance((gray, gray, gray)) < distance(cube) {
        232 + step as u8
    } else {
        (16 + 36 * ri + 6 * gi + bi) as u8
    }
}

fn swatch(color: Color) -> String {
    Style::new()
        .on_color256(palette_index(color))
        .apply_to(SWATCH)
        .to_string()
}

fn row(out: &mut dyn Write, label: &str, color: Color) -> Result<()> {
    writeln!(out, "{:<12} {} {}", label, swatch(color), color)?;
    Ok(())
}

/// Writes one swatch line per named color, then the palette.
pub fn preview(scheme: &Colorscheme, out: &mut dyn Write) -> Result<()> {
    let named = [
        ("foreground", scheme.foreground()),
        ("background", scheme.background()),
        ("cursorColor", scheme.cursor_color()),
    ];
    for (label, color) in named {
        if let Some(color) = color {
            row(out, label, color)?;
        }
    }

    if let (Some(fg), Some(bg)) = (scheme.foreground(), scheme.background()) {
        let sample = Style::new()
            .color256(palette_index(fg))
            .on_color256(palette_index(bg))
            .apply_to(" The quick brown fox ");
        writeln!(out, "{:<12} {}", "sample", sample)?;
    }

    for (i, color) in scheme.colors().iter().enumerate() {
        row(out, &format!("color{}", i), *color)?;
    }
    Ok(())
}
