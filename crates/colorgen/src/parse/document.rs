//! Shared conversion for structured (JSON/YAML) colorscheme documents.

use serde_json::Value;

use crate::error::{Result, SchemeError};
use crate::scheme::{RawScheme, RawValue, BACKGROUND, COLORS, COLORS_INDEXED, FOREGROUND};

/// Key holding the color list in structured documents.
pub(crate) const COLOR_LIST_KEY: &str = "color";

/// Converts a parsed document into the intermediate mapping.
///
/// `color` is renamed to `colors`. Other keys pass through when they hold a
/// string, a list of strings or a mapping of strings.
pub(crate) fn from_document(doc: Value) -> Result<RawScheme> {
    let map = match doc {
        Value::Object(map) => map,
        other => return Err(SchemeError::NotAMapping(value_kind(&other))),
    };

    for key in [FOREGROUND, BACKGROUND, COLOR_LIST_KEY] {
        if !map.contains_key(key) {
            return Err(SchemeError::MissingKey(key.to_string()));
        }
    }

    let mut raw = RawScheme::new();
    for (key, value) in map {
        match key.as_str() {
            COLOR_LIST_KEY => {
                let colors = string_list(&key, value)?;
                raw.insert(COLORS, RawValue::Sequence(colors));
            }
            COLORS | COLORS_INDEXED => {
                log::warn!("ignoring reserved key '{}' in colorscheme document", key);
            }
            FOREGROUND | BACKGROUND => {
                let s = string(&key, value)?;
                raw.insert(key, RawValue::Scalar(s));
            }
            _ => {
                let converted = any_raw(&key, value)?;
                raw.insert(key, converted);
            }
        }
    }
    Ok(raw)
}

fn any_raw(key: &str, value: Value) -> Result<RawValue> {
    match value {
        Value::String(s) => Ok(RawValue::Scalar(s)),
        Value::Array(_) => string_list(key, value).map(RawValue::Sequence),
        Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| {
                let nested = format!("{}.{}", key, k);
                string(&nested, v).map(|s| (k, s))
            })
            .collect::<Result<_>>()
            .map(RawValue::Keyed),
        other => Err(unexpected(key, "a color string, list or mapping", &other)),
    }
}

fn string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(unexpected(key, "a color string", &other)),
    }
}

fn string_list(key: &str, value: Value) -> Result<Vec<String>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| string(&format!("{}[{}]", key, i), v))
            .collect(),
        other => Err(unexpected(key, "a list of color strings", &other)),
    }
}

fn unexpected(key: &str, expected: &'static str, found: &Value) -> SchemeError {
    SchemeError::UnexpectedShape {
        key: key.to_string(),
        expected,
        found: value_kind(found),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
