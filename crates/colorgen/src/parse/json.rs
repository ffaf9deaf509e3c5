//! JSON colorscheme documents.
//!
//! ```json
//! {
//!   "foreground": "#eeeeee",
//!   "background": "#222222",
//!   "color": ["#000000", "#cc0000", "..."]
//! }
//! ```

use super::document::from_document;
use crate::error::Result;
use crate::scheme::RawScheme;

/// Parses a JSON document into the intermediate mapping.
///
/// The `color` array becomes `colors`. Short `#rgb` strings are passed
/// through unchanged and rejected later by normalization.
pub fn parse(text: &str) -> Result<RawScheme> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    from_document(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SchemeError};
    use crate::scheme::{normalize, RawValue};

    #[test]
    fn test_parse_minimal_document() {
        let raw = parse(
            r##"{"foreground":"#eeeeee","background":"#222222","color":["#000000","#ff0000"]}"##,
        )
        .unwrap();

        assert_eq!(raw.get("foreground"), Some(&RawValue::from("#eeeeee")));
        assert_eq!(raw.get("background"), Some(&RawValue::from("#222222")));
        assert_eq!(
            raw.get("colors"),
            Some(&RawValue::Sequence(vec!["#000000".into(), "#ff0000".into()]))
        );
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn test_short_hex_is_not_expanded() {
        let raw = parse(
            r##"{"foreground":"#fff","background":"#000","color":["#111111","#222222"]}"##,
        )
        .unwrap();
        assert_eq!(raw.get("foreground"), Some(&RawValue::from("#fff")));

        let err = normalize(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, SchemeError::Color { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, SchemeError::InvalidJson(_)));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_missing_color_key() {
        let err = parse(r##"{"foreground":"#eeeeee","background":"#222222"}"##).unwrap_err();
        assert!(matches!(err, SchemeError::MissingKey(ref k) if k == "color"));
    }
}
