//! # colorgen-render - Colorscheme templates
//!
//! Renders a [`colorgen::Colorscheme`] through Jinja-style templates into
//! configuration files for terminals and other applications.
//!
//! ## Core Concepts
//!
//! - [`TemplateEngine`]: the render capability, "template name + colorscheme → text"
//! - [`MiniJinjaEngine`]: the default engine, backed by MiniJinja
//! - [`TemplateRegistry`]: resolves template names to inline, file or built-in sources
//! - Color filters (`hex`, `rgb`, `channel`): see [`filters`]
//!
//! ## Quick Start
//!
//! ```rust
//! use colorgen::{normalize, parse::xresources};
//! use colorgen_render::{MiniJinjaEngine, TemplateEngine};
//!
//! let raw = xresources::parse("*.foreground: #eeeeee\n*.background: #222222\n*.color0: #000000\n").unwrap();
//! let scheme = normalize(raw).unwrap();
//!
//! let engine = MiniJinjaEngine::new();
//! let kitty = engine.render_named("kitty.conf", &scheme).unwrap();
//! assert!(kitty.contains("background #222222"));
//! ```
//!
//! ## Template Variables
//!
//! | Variable | Shape |
//! |----------|-------|
//! | `foreground`, `background` | color |
//! | `cursorColor` | color, only when the colorscheme defines it |
//! | `colors` | list of colors |
//! | `colors_indexed` | mapping from position (integer) to color |
//!
//! A color renders as `#rrggbb` by default; use the filters for other shapes.

mod engine;
mod error;
pub mod filters;
pub mod registry;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use registry::{RegistryError, ResolvedTemplate, TemplateRegistry, TEMPLATE_EXTENSIONS};
