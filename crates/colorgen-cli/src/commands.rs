//! Subcommand implementations.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use colorgen::Colorscheme;
use colorgen_render::{TemplateEngine, TemplateRegistry};

use crate::config::Target;

/// Renders one template.
///
/// `template` is read from disk when written as a path (see
/// [`is_explicit_path`]), otherwise resolved as a registry name.
pub fn generate(
    engine: &dyn TemplateEngine,
    scheme: &Colorscheme,
    template: &str,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let as_path = Path::new(template);
    let rendered = if is_explicit_path(template) {
        let source = fs::read_to_string(as_path)
            .with_context(|| format!("failed to read template {}", as_path.display()))?;
        log::debug!("rendering template file {}", as_path.display());
        engine.render_template(&source, scheme)
    } else {
        engine.render_named(template, scheme)
    }
    .with_context(|| format!("failed to render '{}'", template))?;

    match output {
        Some(path) => {
            write_file(path, &rendered)?;
            log::info!("wrote {}", path.display());
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Renders and writes every target in order.
///
/// Stops at the first failure; files written before it stay written.
/// Returns the paths written (or that would be written, on a dry run).
pub fn inject(
    engine: &dyn TemplateEngine,
    scheme: &Colorscheme,
    targets: &[Target],
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    if targets.is_empty() {
        log::warn!("no targets configured");
    }

    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        let rendered = engine
            .render_named(&target.template, scheme)
            .with_context(|| {
                format!(
                    "target [{}]: failed to render '{}'",
                    target.name, target.template
                )
            })?;

        if dry_run {
            log::info!(
                "[{}] would write {} ({} bytes)",
                target.name,
                target.path.display(),
                rendered.len()
            );
        } else {
            write_file(&target.path, &rendered)
                .with_context(|| format!("target [{}]", target.name))?;
            log::info!("[{}] wrote {}", target.name, target.path.display());
        }
        written.push(target.path.clone());
    }
    Ok(written)
}

/// Prints every resolvable template name, one per line.
pub fn templates(registry: &TemplateRegistry, out: &mut dyn Write) -> Result<()> {
    for name in registry.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Absolute, or starting with `./` or `../`. A bare `kitty.conf` is always
/// a template name, even if such a file exists in the working directory.
fn is_explicit_path(template: &str) -> bool {
    let path = Path::new(template);
    path.is_absolute()
        || matches!(
            path.components().next(),
            Some(Component::CurDir | Component::ParentDir)
        )
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
