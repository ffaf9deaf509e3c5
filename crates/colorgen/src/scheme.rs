//! Intermediate and normalized colorscheme mappings.
//!
//! Parsers produce a [`RawScheme`]: string keys mapped to [`RawValue`]s that
//! still hold color *strings*. [`normalize`] turns it into a [`Colorscheme`]
//! whose values are validated [`Color`]s, and adds the derived
//! `colors_indexed` view.
//!
//! ```rust
//! use colorgen::{normalize, Color, RawScheme, RawValue};
//!
//! let mut raw = RawScheme::new();
//! raw.insert("colors", RawValue::Sequence(vec!["#000000".into(), "#ffffff".into()]));
//!
//! let scheme = normalize(raw).unwrap();
//! let indexed = scheme.colors_indexed().unwrap();
//! assert_eq!(indexed[&1], Color::new(255, 255, 255));
//! ```

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::Color;
use crate::error::{Result, SchemeError};

pub const FOREGROUND: &str = "foreground";
pub const BACKGROUND: &str = "background";
pub const CURSOR_COLOR: &str = "cursorColor";
pub const COLORS: &str = "colors";
pub const COLORS_INDEXED: &str = "colors_indexed";

/// A string-valued entry of the intermediate mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Scalar(String),
    Sequence(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl RawValue {
    pub fn shape(&self) -> &'static str {
        match self {
            RawValue::Scalar(_) => "string",
            RawValue::Sequence(_) => "list",
            RawValue::Keyed(_) => "mapping",
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Scalar(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Scalar(s)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(v: Vec<String>) -> Self {
        RawValue::Sequence(v)
    }
}

/// Format-agnostic colorscheme as produced by the parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScheme {
    entries: BTreeMap<String, RawValue>,
}

impl RawScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.entries.iter()
    }

    /// Returns an error naming the first of `keys` that is absent.
    pub(crate) fn require(&self, keys: &[&str]) -> Result<()> {
        match keys.iter().find(|k| !self.contains_key(k)) {
            Some(missing) => Err(SchemeError::MissingKey(missing.to_string())),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawScheme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut scheme = RawScheme::new();
        for (k, v) in iter {
            scheme.insert(k, v);
        }
        scheme
    }
}

impl IntoIterator for RawScheme {
    type Item = (String, RawValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A normalized entry: the [`RawValue`] shape with every string parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    Single(Color),
    List(Vec<Color>),
    Keyed(BTreeMap<String, Color>),
    /// Position-keyed view; only produced for `colors_indexed`.
    Indexed(BTreeMap<usize, Color>),
}

impl ColorValue {
    pub fn as_single(&self) -> Option<Color> {
        match self {
            ColorValue::Single(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Color]> {
        match self {
            ColorValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ColorValue::Single(c) => c.serialize(serializer),
            ColorValue::List(v) => v.serialize(serializer),
            ColorValue::Keyed(m) => m.serialize(serializer),
            ColorValue::Indexed(m) => m.serialize(serializer),
        }
    }
}

/// A colorscheme whose values are validated colors.
///
/// Serializes as a flat mapping and is the template context handed to the
/// renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colorscheme {
    entries: BTreeMap<String, ColorValue>,
}

impl Colorscheme {
    pub fn get(&self, key: &str) -> Option<&ColorValue> {
        self.entries.get(key)
    }

    pub fn foreground(&self) -> Option<Color> {
        self.get(FOREGROUND).and_then(ColorValue::as_single)
    }

    pub fn background(&self) -> Option<Color> {
        self.get(BACKGROUND).and_then(ColorValue::as_single)
    }

    pub fn cursor_color(&self) -> Option<Color> {
        self.get(CURSOR_COLOR).and_then(ColorValue::as_single)
    }

    pub fn colors(&self) -> &[Color] {
        self.get(COLORS).and_then(ColorValue::as_list).unwrap_or(&[])
    }

    pub fn colors_indexed(&self) -> Option<&BTreeMap<usize, Color>> {
        match self.get(COLORS_INDEXED) {
            Some(ColorValue::Indexed(m)) => Some(m),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ColorValue)> {
        self.entries.iter()
    }
}

impl Serialize for Colorscheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Converts every color string in `raw` into a [`Color`] and derives
/// `colors_indexed` from `colors`.
///
/// # Errors
///
/// - [`SchemeError::Color`] when a value is not a valid hex color
/// - [`SchemeError::MissingKey`] when `colors` is absent
/// - [`SchemeError::UnexpectedShape`] when `colors` is not a list
pub fn normalize(raw: RawScheme) -> Result<Colorscheme> {
    let mut entries = BTreeMap::new();

    for (key, value) in raw {
        if key == COLORS_INDEXED {
            log::warn!("ignoring '{}' in input; it is derived from '{}'", key, COLORS);
            continue;
        }
        let converted = convert(&key, value)?;
        entries.insert(key, converted);
    }

    let indexed: BTreeMap<usize, Color> = match entries.get(COLORS) {
        Some(ColorValue::List(colors)) => colors.iter().copied().enumerate().collect(),
        Some(other) => {
            return Err(SchemeError::UnexpectedShape {
                key: COLORS.to_string(),
                expected: "a list of colors",
                found: shape_name(other),
            })
        }
        None => return Err(SchemeError::MissingKey(COLORS.to_string())),
    };
    entries.insert(COLORS_INDEXED.to_string(), ColorValue::Indexed(indexed));

    log::debug!("normalized colorscheme with {} keys", entries.len());
    Ok(Colorscheme { entries })
}

fn convert(key: &str, value: RawValue) -> Result<ColorValue> {
    Ok(match value {
        RawValue::Scalar(s) => ColorValue::Single(parse_at(&s, || key.to_string())?),
        RawValue::Sequence(items) => ColorValue::List(
            items
                .iter()
                .enumerate()
                .map(|(i, s)| parse_at(s, || format!("{}[{}]", key, i)))
                .collect::<Result<Vec<_>>>()?,
        ),
        RawValue::Keyed(map) => {
            let mut out = BTreeMap::new();
            for (k, s) in map {
                let color = parse_at(&s, || format!("{}.{}", key, k))?;
                out.insert(k, color);
            }
            ColorValue::Keyed(out)
        }
    })
}

fn parse_at(s: &str, at: impl FnOnce() -> String) -> Result<Color> {
    Color::from_hex_str(s).map_err(|e| SchemeError::color(at(), e))
}

fn shape_name(value: &ColorValue) -> &'static str {
    match value {
        ColorValue::Single(_) => "string",
        ColorValue::List(_) => "list",
        ColorValue::Keyed(_) | ColorValue::Indexed(_) => "mapping",
    }
}
