//! Xresources-style colorscheme files.
//!
//! ```text
//! ! comment
//! *.foreground: #eeeeee
//! *.background: #222222
//! *.cursorColor: #ff0000
//! *.color0: #000000
//! *.color1: #ff0000
//! ```
//!
//! Lines are trimmed first, so blank lines and indented `!` comments are
//! skipped. Matching is deliberately loose: a line is considered when it
//! contains `foreground`, `background`, `cursorColor` or `color` anywhere. Names
//! without a lowercase `color` are stored as-is; the rest must be
//! `color<N>`. Matching is case-sensitive, so `cursorColor` is a plain key.
//!
//! Indices are not required to be contiguous. `colors` holds the values in
//! ascending index order with gaps closed up, so `color0` and `color2` give a
//! two-element list.

use std::collections::BTreeMap;

use crate::error::{Result, SchemeError};
use crate::scheme::{RawScheme, RawValue, BACKGROUND, COLORS, FOREGROUND};

/// Substrings that make a line relevant.
const RELEVANT: &[&str] = &["foreground", "background", "cursorColor", "color"];

const INDEXED_PREFIX: &str = "color";

/// Parses Xresources text into the intermediate mapping.
///
/// # Errors
///
/// - [`SchemeError::MalformedLine`] for a relevant line without `:`
/// - [`SchemeError::InvalidIndex`] for a `color` name whose suffix is not an index
/// - [`SchemeError::MissingKey`] if `foreground` or `background` never appears
pub fn parse(text: &str) -> Result<RawScheme> {
    let mut raw = RawScheme::new();
    let mut indexed: BTreeMap<usize, String> = BTreeMap::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }

        let line = line.strip_prefix("*.").unwrap_or(line);
        if !RELEVANT.iter().any(|needle| line.contains(needle)) {
            continue;
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| SchemeError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;
        let (name, value) = (name.trim(), value.trim());

        if !name.contains(INDEXED_PREFIX) {
            raw.insert(name, value);
            continue;
        }

        let index = name
            .strip_prefix(INDEXED_PREFIX)
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| SchemeError::InvalidIndex {
                line: line_no,
                name: name.to_string(),
            })?;
        if indexed.insert(index, value.to_string()).is_some() {
            log::debug!("line {}: color{} redefined", line_no, index);
        }
    }

    if let Some(gap) = indexed.keys().enumerate().find(|(pos, idx)| pos != *idx) {
        log::warn!(
            "color indices are not contiguous (expected color{}, found color{}); \
             later colors shift down",
            gap.0,
            gap.1
        );
    }

    raw.insert(COLORS, RawValue::Sequence(indexed.into_values().collect()));
    raw.require(&[FOREGROUND, BACKGROUND])?;
    Ok(raw)
}
