//! YAML colorscheme documents.
//!
//! Same shape as the JSON format. Hex values must be quoted, since an
//! unquoted `#` starts a YAML comment:
//!
//! ```yaml
//! foreground: "#eeeeee"
//! background: "#222222"
//! color:
//!   - "#000000"
//!   - "#cc0000"
//! ```

use super::document::from_document;
use crate::error::Result;
use crate::scheme::RawScheme;

/// Parses a YAML document into the intermediate mapping.
pub fn parse(text: &str) -> Result<RawScheme> {
    let doc: serde_json::Value = serde_yaml::from_str(text)?;
    from_document(doc)
}
