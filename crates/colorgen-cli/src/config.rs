//! Target configuration for `colorgen inject`.
//!
//! The file is INI. Every section is one target; an optional
//! `template_dirs` key before the first section adds comma-separated
//! template search directories:
//!
//! ```ini
//! template_dirs = ~/.config/colorgen/templates
//!
//! [kitty]
//! template = kitty.conf
//! target = ~/.config/kitty/colors.conf
//!
//! [alacritty]
//! template = alacritty.toml
//! target = $XDG_CONFIG_HOME/alacritty/colors.toml
//! ```
//!
//! Targets are kept in file order. Paths expand `~` and environment
//! variables.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, Properties};
use thiserror::Error;

const TEMPLATE_DIRS: &str = "template_dirs";
const TEMPLATE: &str = "template";
const TARGET: &str = "target";

/// Errors raised while loading a target configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] ini::ParseError),

    #[error("invalid target [{name}]: {message}")]
    InvalidTarget { name: String, message: String },

    #[error("unexpected key '{0}' outside a target section")]
    UnexpectedKey(String),

    #[error("cannot expand '{value}': {message}")]
    Expand { value: String, message: String },
}

/// One rendered file: which template goes where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Section name in the config file.
    pub name: String,
    /// Template name, resolved through the registry.
    pub template: String,
    /// Destination path with `~` and variables expanded.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetConfig {
    pub template_dirs: Vec<PathBuf>,
    pub targets: Vec<Target>,
}

impl TargetConfig {
    /// `<config dir>/colorgen/targets.ini`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("colorgen").join("targets.ini"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading targets from {}", path.display());
        Self::from_ini(&text)
    }

    pub fn from_ini(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text)?;
        let mut config = TargetConfig::default();

        for (section, props) in ini.iter() {
            match section {
                None => config.read_general(props)?,
                Some(name) => config.targets.push(read_target(name, props)?),
            }
        }

        Ok(config)
    }

    fn read_general(&mut self, props: &Properties) -> Result<(), ConfigError> {
        for (key, value) in props.iter() {
            if key != TEMPLATE_DIRS {
                return Err(ConfigError::UnexpectedKey(key.to_string()));
            }
            for dir in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
                self.template_dirs.push(expand_path(dir)?);
            }
        }
        Ok(())
    }
}

fn read_target(name: &str, props: &Properties) -> Result<Target, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidTarget {
        name: name.to_string(),
        message,
    };

    if let Some((key, _)) = props.iter().find(|(k, _)| *k != TEMPLATE && *k != TARGET) {
        return Err(invalid(format!("unknown key '{}'", key)));
    }
    let required = |key: &str| {
        props
            .get(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| invalid(format!("missing '{}'", key)))
    };

    Ok(Target {
        name: name.to_string(),
        template: required(TEMPLATE)?.to_string(),
        path: expand_path(required(TARGET)?)?,
    })
}

/// Expands `~` and `$VAR` / `${VAR}` references.
pub fn expand_path(value: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(value)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ConfigError::Expand {
            value: value.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_in_file_order() {
        let config = TargetConfig::from_ini(
            "[zeta]\n\
             template = kitty.conf\n\
             target = /tmp/zeta.conf\n\
             \n\
             [alpha]\n\
             template = foot.ini\n\
             target = /tmp/alpha.ini\n",
        )
        .unwrap();

        let names: Vec<&str> = config.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(config.targets[1].template, "foot.ini");
        assert_eq!(config.targets[1].path, PathBuf::from("/tmp/alpha.ini"));
        assert!(config.template_dirs.is_empty());
    }

    #[test]
    fn test_unquoted_tilde_target_expanded() {
        let config = TargetConfig::from_ini(
            "[kitty]\ntemplate = kitty.conf\ntarget = ~/.config/kitty/colors.conf\n",
        )
        .unwrap();
        let target = &config.targets[0];
        assert_eq!(target.template, "kitty.conf");
        assert!(!target.path.starts_with("~"));
        assert!(target.path.ends_with(".config/kitty/colors.conf"));
    }

    #[test]
    fn test_comments_ignored() {
        let config = TargetConfig::from_ini(
            "; managed by hand\n[kitty]\n# terminal\ntemplate = kitty.conf\ntarget = /tmp/k.conf\n",
        )
        .unwrap();
        assert_eq!(config.targets.len(), 1);
    }

    #[test]
    fn test_template_dirs() {
        let config = TargetConfig::from_ini("template_dirs = /opt/a, /opt/b\n").unwrap();
        assert_eq!(
            config.template_dirs,
            vec![PathBuf::from("/opt/a"), PathBuf::from("/opt/b")]
        );
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_missing_key() {
        let err = TargetConfig::from_ini("[kitty]\ntemplate = kitty.conf\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget { ref name, .. } if name == "kitty"));
        assert!(err.to_string().contains("missing 'target'"));
    }

    #[test]
    fn test_unknown_key_in_section() {
        let err = TargetConfig::from_ini(
            "[kitty]\ntemplate = kitty.conf\ntarget = /tmp/x\nmode = 0644\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("mode"));
    }

    #[test]
    fn test_key_outside_section() {
        let err = TargetConfig::from_ini("template = kitty.conf\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedKey(ref k) if k == "template"));
    }

    #[test]
    fn test_syntax_error() {
        let err = TargetConfig::from_ini("[kitty\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_undefined_variable() {
        let err = TargetConfig::from_ini(
            "[kitty]\ntemplate = kitty.conf\ntarget = $COLORGEN_SURELY_UNSET_VAR/x\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Expand { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.ini");
        fs::write(&path, "[foot]\ntemplate = foot.ini\ntarget = /tmp/foot.ini\n").unwrap();
        let config = TargetConfig::load(&path).unwrap();
        assert_eq!(config.targets[0].name, "foot");

        let err = TargetConfig::load(&dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
