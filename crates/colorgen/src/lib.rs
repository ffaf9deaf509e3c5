//! # colorgen - Terminal colorscheme parsing
//!
//! `colorgen` reads a terminal colorscheme (JSON, YAML or Xresources) and
//! turns it into a [`Colorscheme`] of validated [`Color`]s, ready to be used
//! as a template context by `colorgen-render`.
//!
//! ## Pipeline
//!
//! ```text
//! file ──parse──▶ RawScheme (strings) ──normalize──▶ Colorscheme (Colors)
//! ```
//!
//! - [`parse`]: one parser per input format plus extension-based [`Format`] detection
//! - [`normalize`]: converts every color string and derives `colors_indexed`
//! - [`Color`]: the RGBA value object with hex and decimal renderings
//!
//! ## Quick Start
//!
//! ```rust
//! use colorgen::{normalize, parse::xresources, Color};
//!
//! let text = "\
//! ! dark scheme
//! *.foreground: #eeeeee
//! *.background: #222222
//! *.color0: #000000
//! *.color1: #ff0000
//! ";
//!
//! let scheme = normalize(xresources::parse(text).unwrap()).unwrap();
//! assert_eq!(scheme.background(), Some(Color::new(0x22, 0x22, 0x22)));
//! assert_eq!(scheme.colors()[1].to_hex_string(true, false), "#ff0000");
//! ```

pub mod color;
pub mod error;
pub mod parse;
pub mod scheme;

pub use color::Color;
pub use error::{ColorError, ErrorKind, Result, SchemeError};
pub use parse::{load_file, parse_str, Format};
pub use scheme::{normalize, ColorValue, Colorscheme, RawScheme, RawValue};
