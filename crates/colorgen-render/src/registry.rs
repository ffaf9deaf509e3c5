//! Template resolution from inline strings, directories and built-ins.
//!
//! # Resolution Order
//!
//! Templates are looked up by name in this order:
//!
//! 1. Inline templates added with [`TemplateRegistry::add_inline`]
//! 2. Template directories, in registration order (first directory wins)
//! 3. Built-in templates shipped with the crate (lowest priority)
//!
//! A user directory can therefore override a built-in by providing a file
//! with the same name.
//!
//! # Names and Extensions
//!
//! Template names are file names relative to a template directory, e.g.
//! `"kitty.conf"` or `"editors/helix.toml"`. A file may also carry a
//! template extension from [`TEMPLATE_EXTENSIONS`]: `"kitty.conf"` resolves
//! to `kitty.conf`, then `kitty.conf.jinja`, then `kitty.conf.j2`.
//!
//! # Example
//!
//! ```rust,ignore
//! use colorgen_render::TemplateRegistry;
//!
//! let mut registry = TemplateRegistry::with_builtins();
//! registry.add_template_dir("~/.config/colorgen/templates")?;
//!
//! let source = registry.get_content("kitty.conf")?;
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".jinja", ".j2"];

/// Templates compiled into the binary, keyed by name.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("kitty.conf", include_str!("../templates/kitty.conf.jinja")),
    ("alacritty.toml", include_str!("../templates/alacritty.toml.jinja")),
    ("foot.ini", include_str!("../templates/foot.ini.jinja")),
    ("Xresources", include_str!("../templates/Xresources.jinja")),
];

/// Where a resolved template's content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// Content held in memory (inline or built-in).
    Inline(String),
    /// Content read from disk on demand.
    File(PathBuf),
}

/// Error type for template registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No source provides a template with this name.
    NotFound {
        /// The name that was requested
        name: String,
    },

    /// A registered template directory does not exist.
    DirectoryNotFound {
        /// The missing directory
        path: PathBuf,
    },

    /// Failed to read template file from disk.
    ReadError {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound { name } => {
                write!(f, "Template not found: \"{}\"", name)
            }
            RegistryError::DirectoryNotFound { path } => {
                write!(f, "Template directory not found: {}", path.display())
            }
            RegistryError::ReadError { path, message } => {
                write!(
                    f,
                    "Failed to read template \"{}\": {}",
                    path.display(),
                    message
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry for template resolution from multiple sources.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    /// Inline templates (highest priority).
    inline: HashMap<String, String>,

    /// Template directories, searched in order.
    dirs: Vec<PathBuf>,

    /// Built-in templates (lowest priority fallback).
    builtin: HashMap<String, &'static str>,
}

impl TemplateRegistry {
    /// Creates an empty registry with no built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in templates.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.builtin = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, content)| (name.to_string(), *content))
            .collect();
        registry
    }

    /// Adds an inline template, shadowing any file or built-in of the same name.
    pub fn add_inline(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.inline.insert(name.into(), content.into());
    }

    /// Appends a directory to the search path.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DirectoryNotFound`] if `path` is not a directory.
    pub fn add_template_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RegistryError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(RegistryError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        log::debug!("added template directory {}", path.display());
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Looks up a template by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no source provides `name`.
    pub fn get(&self, name: &str) -> Result<ResolvedTemplate, RegistryError> {
        if let Some(content) = self.inline.get(name) {
            return Ok(ResolvedTemplate::Inline(content.clone()));
        }

        if let Some(path) = self.find_in_dirs(name) {
            return Ok(ResolvedTemplate::File(path));
        }

        if let Some(content) = self.builtin.get(name) {
            return Ok(ResolvedTemplate::Inline(content.to_string()));
        }

        Err(RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    /// Gets the content of a template, reading from disk if necessary.
    pub fn get_content(&self, name: &str) -> Result<String, RegistryError> {
        match self.get(name)? {
            ResolvedTemplate::Inline(content) => Ok(content),
            ResolvedTemplate::File(path) => {
                std::fs::read_to_string(&path).map_err(|e| RegistryError::ReadError {
                    path,
                    message: e.to_string(),
                })
            }
        }
    }

    /// Like [`get_content`](Self::get_content) but maps "not found" to `None`.
    pub fn load(&self, name: &str) -> Result<Option<String>, RegistryError> {
        match self.get_content(name) {
            Ok(content) => Ok(Some(content)),
            Err(RegistryError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Returns every resolvable template name, sorted.
    ///
    /// File templates are listed without their template extension.
    pub fn names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.inline.keys().cloned().collect();
        names.extend(self.builtin.keys().cloned());
        for dir in &self.dirs {
            let mut found = Vec::new();
            if let Err(e) = walk_dir(dir, dir, &mut found) {
                log::warn!("cannot list templates in {}: {}", dir.display(), e);
            }
            names.extend(found);
        }
        names.into_iter().collect()
    }

    fn find_in_dirs(&self, name: &str) -> Option<PathBuf> {
        if !is_relative_name(name) {
            return None;
        }
        let candidates: Vec<String> = std::iter::once(name.to_string())
            .chain(TEMPLATE_EXTENSIONS.iter().map(|ext| format!("{}{}", name, ext)))
            .collect();

        self.dirs.iter().find_map(|dir| {
            candidates
                .iter()
                .map(|c| dir.join(c))
                .find(|path| path.is_file())
        })
    }
}

/// Rejects absolute names and `..` so lookups stay inside template directories.
fn is_relative_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn walk_dir(root: &Path, dir: &Path, out: &mut Vec<String>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(root, &path, out)?;
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let name = TEMPLATE_EXTENSIONS
            .iter()
            .find_map(|ext| name.strip_suffix(ext))
            .map(str::to_string)
            .unwrap_or(name);
        out.push(name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtins_available() {
        let registry = TemplateRegistry::with_builtins();
        for name in ["kitty.conf", "alacritty.toml", "foot.ini", "Xresources"] {
            assert!(registry.contains(name), "missing builtin {}", name);
        }
        assert!(!TemplateRegistry::new().contains("kitty.conf"));
    }

    #[test]
    fn test_inline_shadows_builtin() {
        let mut registry = TemplateRegistry::with_builtins();
        registry.add_inline("kitty.conf", "custom");
        assert_eq!(registry.get_content("kitty.conf").unwrap(), "custom");
    }

    #[test]
    fn test_not_found() {
        let registry = TemplateRegistry::new();
        assert_eq!(
            registry.get("nope"),
            Err(RegistryError::NotFound {
                name: "nope".to_string()
            })
        );
        assert_eq!(registry.load("nope"), Ok(None));
    }

    #[test]
    fn test_missing_directory() {
        let mut registry = TemplateRegistry::new();
        let err = registry
            .add_template_dir("/definitely/not/here")
            .unwrap_err();
        assert!(matches!(err, RegistryError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_directory_overrides_builtin() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("kitty.conf"), "from dir").unwrap();

        let mut registry = TemplateRegistry::with_builtins();
        registry.add_template_dir(dir.path()).unwrap();

        assert_eq!(
            registry.get("kitty.conf").unwrap(),
            ResolvedTemplate::File(dir.path().join("kitty.conf"))
        );
        assert_eq!(registry.get_content("kitty.conf").unwrap(), "from dir");
    }

    #[test]
    fn test_template_extension_resolution() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("editors")).unwrap();
        fs::write(dir.path().join("editors/helix.toml.j2"), "helix").unwrap();
        fs::write(dir.path().join("sway.jinja"), "sway").unwrap();

        let mut registry = TemplateRegistry::new();
        registry.add_template_dir(dir.path()).unwrap();

        assert_eq!(registry.get_content("editors/helix.toml").unwrap(), "helix");
        assert_eq!(registry.get_content("sway").unwrap(), "sway");
        assert_eq!(registry.get_content("sway.jinja").unwrap(), "sway");
    }

    #[test]
    fn test_first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("t"), "first").unwrap();
        fs::write(second.path().join("t"), "second").unwrap();

        let mut registry = TemplateRegistry::new();
        registry.add_template_dir(first.path()).unwrap();
        registry.add_template_dir(second.path()).unwrap();

        assert_eq!(registry.get_content("t").unwrap(), "first");
    }

    #[test]
    fn test_parent_components_rejected() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("templates");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("secret"), "x").unwrap();

        let mut registry = TemplateRegistry::new();
        registry.add_template_dir(&nested).unwrap();

        assert!(!registry.contains("../secret"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_names_lists_all_sources() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/bar.conf.jinja"), "").unwrap();
        fs::write(dir.path().join("foo"), "").unwrap();

        let mut registry = TemplateRegistry::with_builtins();
        registry.add_template_dir(dir.path()).unwrap();
        registry.add_inline("inline", "");

        let names = registry.names();
        assert!(names.contains(&"foo".to_string()));
        assert!(names.contains(&"sub/bar.conf".to_string()));
        assert!(names.contains(&"inline".to_string()));
        assert!(names.contains(&"kitty.conf".to_string()));
    }
}
