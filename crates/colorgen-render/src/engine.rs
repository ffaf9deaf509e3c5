//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, the one capability the
//! rest of the program needs from a template backend: render a named (or
//! ad-hoc) template against a [`Colorscheme`]. The default implementation is
//! [`MiniJinjaEngine`].

use std::sync::Arc;

use colorgen::Colorscheme;
use minijinja::{Environment, Value};

use crate::error::RenderError;
use crate::filters::register_color_filters;
use crate::registry::TemplateRegistry;

/// A template engine that renders colorschemes.
///
/// The colorscheme is the whole template context: `foreground`,
/// `background`, `cursorColor`, `colors`, `colors_indexed` and any
/// passthrough keys are top-level variables.
pub trait TemplateEngine: Send + Sync {
    /// Renders a template resolved by name.
    fn render_named(&self, name: &str, scheme: &Colorscheme) -> Result<String, RenderError>;

    /// Compiles and renders template source in one step.
    fn render_template(&self, source: &str, scheme: &Colorscheme) -> Result<String, RenderError>;

    /// Checks if a template with the given name can be resolved.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Templates are resolved lazily through a [`TemplateRegistry`], so
/// `{% include %}` and `{% extends %}` work across built-in and user
/// templates. Block tags trim their trailing newline and leading
/// whitespace, and a template's final newline is kept.
///
/// # Example
///
/// ```rust
/// use colorgen::{normalize, parse::json};
/// use colorgen_render::{MiniJinjaEngine, TemplateEngine};
///
/// let raw = json::parse(r##"{"foreground":"#eeeeee","background":"#222222","color":["#000000"]}"##).unwrap();
/// let scheme = normalize(raw).unwrap();
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("bg={{ background | hex(pound=false) }}", &scheme)
///     .unwrap();
/// assert_eq!(output, "bg=222222");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
    registry: Arc<TemplateRegistry>,
}

impl MiniJinjaEngine {
    /// Creates an engine that knows the built-in templates.
    pub fn new() -> Self {
        Self::with_registry(TemplateRegistry::with_builtins())
    }

    /// Creates an engine that resolves template names through `registry`.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        let registry = Arc::new(registry);

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_color_filters(&mut env);

        let loader_registry = Arc::clone(&registry);
        env.set_loader(move |name| {
            loader_registry.load(name).map_err(|e| {
                minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string())
            })
        });

        Self { env, registry }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_named(&self, name: &str, scheme: &Colorscheme) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        log::debug!("rendering template '{}'", name);
        Ok(tmpl.render(Value::from_serialize(scheme))?)
    }

    fn render_template(&self, source: &str, scheme: &Colorscheme) -> Result<String, RenderError> {
        Ok(self.env.render_str(source, Value::from_serialize(scheme))?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}
