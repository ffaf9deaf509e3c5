//! Error types for color parsing and colorscheme loading.
//!
//! Two layers exist: [`ColorError`] for a single color value and
//! [`SchemeError`] for everything that happens while turning a file into a
//! [`Colorscheme`](crate::Colorscheme). Every error maps onto one of the
//! coarse categories in [`ErrorKind`].

use std::path::PathBuf;

/// Coarse error category.
///
/// Callers that only care about *why* a conversion failed (bad input versus
/// an impossible value) can match on this instead of individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unrecognized input.
    Format,
    /// A numeric value outside its allowed range.
    Validation,
    /// A value of an unexpected shape in the intermediate mapping.
    Type,
    /// Reading the input failed.
    Io,
}

/// Errors produced while parsing or constructing a single [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string is not a `#rrggbb` / `#rrggbbaa` hex color.
    #[error("invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: &'static str },

    /// The string is not an `r,g,b` / `r,g,b,a` decimal tuple.
    #[error("invalid decimal color '{value}': {reason}")]
    InvalidTuple { value: String, reason: String },

    /// A channel value does not fit in 0-255.
    #[error("{channel} channel out of range (0-255): {value}")]
    ChannelOutOfRange { channel: &'static str, value: i64 },
}

impl ColorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::InvalidHex { .. } | ColorError::InvalidTuple { .. } => ErrorKind::Format,
            ColorError::ChannelOutOfRange { .. } => ErrorKind::Validation,
        }
    }

    pub(crate) fn hex(value: &str, reason: &'static str) -> Self {
        Self::InvalidHex {
            value: value.to_string(),
            reason,
        }
    }
}

/// Errors produced while loading, parsing or normalizing a colorscheme.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    /// A color value under `key` could not be converted.
    #[error("color '{key}': {source}")]
    Color {
        key: String,
        #[source]
        source: ColorError,
    },

    /// The input is not valid JSON.
    #[error("invalid JSON colorscheme: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The input is not valid YAML.
    #[error("invalid YAML colorscheme: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// A structured document whose root is not a mapping.
    #[error("colorscheme document must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A required key is absent.
    #[error("colorscheme is missing required key '{0}'")]
    MissingKey(String),

    /// A relevant Xresources line has no `:` separator.
    #[error("line {line}: expected '<name>: <value>', got '{content}'")]
    MalformedLine { line: usize, content: String },

    /// A `color<N>` resource whose suffix is not a non-negative integer.
    #[error("line {line}: invalid color index in resource '{name}'")]
    InvalidIndex { line: usize, name: String },

    /// The file extension does not name a known colorscheme format.
    #[error("cannot determine colorscheme format of {}", .0.display())]
    UnknownFormat(PathBuf),

    /// A value in the intermediate mapping has a shape the normalizer cannot handle.
    #[error("key '{key}': expected {expected}, found {found}")]
    UnexpectedShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Reading the colorscheme file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemeError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemeError::Color { source, .. } => source.kind(),
            SchemeError::InvalidJson(_)
            | SchemeError::InvalidYaml(_)
            | SchemeError::NotAMapping(_)
            | SchemeError::MissingKey(_)
            | SchemeError::MalformedLine { .. }
            | SchemeError::InvalidIndex { .. }
            | SchemeError::UnknownFormat(_) => ErrorKind::Format,
            SchemeError::UnexpectedShape { .. } => ErrorKind::Type,
            SchemeError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn color(key: impl Into<String>, source: ColorError) -> Self {
        Self::Color {
            key: key.into(),
            source,
        }
    }
}

/// Result type for colorscheme operations.
pub type Result<T> = std::result::Result<T, SchemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_kinds() {
        assert_eq!(ColorError::hex("#ff", "too short").kind(), ErrorKind::Format);
        let err = ColorError::ChannelOutOfRange {
            channel: "red",
            value: 256,
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_scheme_error_inherits_color_kind() {
        let err = SchemeError::color(
            "foreground",
            ColorError::ChannelOutOfRange {
                channel: "alpha",
                value: -1,
            },
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("foreground"));
    }

    #[test]
    fn test_malformed_line_display() {
        let err = SchemeError::MalformedLine {
            line: 4,
            content: "*.color3 #ffffff".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("*.color3 #ffffff"));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_unexpected_shape_is_type_kind() {
        let err = SchemeError::UnexpectedShape {
            key: "alpha".into(),
            expected: "a color string, list or mapping",
            found: "number",
        };
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
