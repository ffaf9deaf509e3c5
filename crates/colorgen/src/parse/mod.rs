//! Colorscheme file formats.
//!
//! Each parser turns source text into a [`RawScheme`]; [`load_file`] picks a
//! parser from the file name, reads the file and normalizes the result.
//!
//! | Format | Extensions | Parser |
//! |--------|------------|--------|
//! | JSON | `.json` | [`json::parse`] |
//! | YAML | `.yaml`, `.yml` | [`yaml::parse`] |
//! | Xresources | `.xresources`, `.xdefaults`, `.ad`, or a file named `.Xresources` / `.Xdefaults` | [`xresources::parse`] |
//!
//! ```rust,ignore
//! use colorgen::parse::{load_file, Format};
//!
//! let scheme = load_file("themes/dracula.json", None)?;
//! let forced = load_file("themes/dracula", Some(Format::Xresources))?;
//! ```

pub mod json;
pub mod xresources;
pub mod yaml;

mod document;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SchemeError};
use crate::scheme::{normalize, Colorscheme, RawScheme};

/// Dotfile names recognized as Xresources regardless of extension.
const XRESOURCES_FILE_NAMES: &[&str] = &[".Xresources", ".Xdefaults", "Xresources", "Xdefaults"];

/// A supported colorscheme input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xresources,
}

impl Format {
    /// Determines the format from a file's extension or name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| XRESOURCES_FILE_NAMES.contains(n))
            .map(|_| Format::Xresources);

        let by_extension = || {
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            match ext.as_str() {
                "json" => Some(Format::Json),
                "yaml" | "yml" => Some(Format::Yaml),
                "xresources" | "xdefaults" | "ad" => Some(Format::Xresources),
                _ => None,
            }
        };

        by_name
            .or_else(by_extension)
            .ok_or_else(|| SchemeError::UnknownFormat(path.to_path_buf()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xresources => "xresources",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "xresources" | "xrdb" => Ok(Format::Xresources),
            other => Err(format!(
                "unknown colorscheme format '{}' (expected one of: json, yaml, xresources)",
                other
            )),
        }
    }
}

/// Parses `text` in the given format into the intermediate mapping.
pub fn parse_str(format: Format, text: &str) -> Result<RawScheme> {
    match format {
        Format::Json => json::parse(text),
        Format::Yaml => yaml::parse(text),
        Format::Xresources => xresources::parse(text),
    }
}

/// Reads, parses and normalizes a colorscheme file.
///
/// When `format` is `None` it is derived from the path with
/// [`Format::from_path`].
pub fn load_file(path: impl AsRef<Path>, format: Option<Format>) -> Result<Colorscheme> {
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => Format::from_path(path)?,
    };

    let text = std::fs::read_to_string(path).map_err(|source| SchemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("parsing {} as {}", path.display(), format);

    normalize(parse_str(format, &text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("b.JSON")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("b.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("b.yaml")).unwrap(), Format::Yaml);
        assert_eq!(
            Format::from_path(Path::new("nord.xresources")).unwrap(),
            Format::Xresources
        );
        assert_eq!(
            Format::from_path(Path::new("nord.Xdefaults")).unwrap(),
            Format::Xresources
        );
    }

    #[test]
    fn test_format_from_dotfile_name() {
        assert_eq!(
            Format::from_path(Path::new("/home/u/.Xresources")).unwrap(),
            Format::Xresources
        );
        assert_eq!(
            Format::from_path(Path::new("Xdefaults")).unwrap(),
            Format::Xresources
        );
    }

    #[test]
    fn test_unknown_format() {
        let err = Format::from_path(Path::new("scheme.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(Format::from_path(Path::new("scheme")).is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("xrdb".parse::<Format>().unwrap(), Format::Xresources);
        assert!("toml".parse::<Format>().is_err());
    }

    #[test]
    fn test_parse_str_dispatches() {
        let raw = parse_str(
            Format::Xresources,
            "*.foreground: #ffffff\n*.background: #000000\n",
        )
        .unwrap();
        assert!(raw.contains_key("colors"));
    }
}
