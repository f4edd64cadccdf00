//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/docnav/docnav.toml`
//! 3. Environment variables: `DOCNAV_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_FALLBACK_TITLE;

/// Unified configuration for docnav.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Navigation manifest to load instead of the compiled-in tree
    pub manifest: Option<PathBuf>,
    /// Breadcrumb title for paths outside the tree
    pub fallback_title: String,
    /// Colorize terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest: None,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            color: true,
        }
    }
}

/// Get the XDG config directory for docnav.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "docnav").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("docnav.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("fallback_title", defaults.fallback_title.clone())
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("DOCNAV").separator("__"));

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();
        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(manifest) = &self.manifest {
            self.manifest = Some(PathBuf::from(expand_env_vars(
                manifest.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Effective manifest path, preferring an explicit CLI override.
    pub fn manifest_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.manifest.clone())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# docnav configuration
#
# Location: ~/.config/docnav/docnav.toml
# Environment variables with the DOCNAV_ prefix override file values,
# e.g. DOCNAV_FALLBACK_TITLE="Product Docs".

# Navigation manifest (TOML). When unset, the compiled-in tree is used.
# manifest = "~/docs/nav.toml"

# Breadcrumb title shown for paths that are not part of the tree
# fallback_title = "Documentation"

# Colorize terminal output
# color = true
"#
        .to_string()
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}`, and `~` via the shellexpand crate.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert!(!settings.fallback_title.is_empty());
    }

    #[test]
    fn given_tilde_in_manifest_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            manifest: Some(PathBuf::from("~/docs/nav.toml")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let manifest = settings.manifest.unwrap();
        let manifest_str = manifest.to_string_lossy();
        assert!(
            manifest_str.starts_with(&home),
            "manifest should start with home dir: {}",
            manifest_str
        );
        assert!(!manifest_str.contains('~'));
    }

    #[test]
    fn given_cli_override_when_resolving_manifest_then_it_wins() {
        let settings = Settings {
            manifest: Some(PathBuf::from("/from/config.toml")),
            ..Settings::default()
        };

        let effective = settings.manifest_path(Some(Path::new("/from/cli.toml")));
        assert_eq!(effective, Some(PathBuf::from("/from/cli.toml")));

        let effective = settings.manifest_path(None);
        assert_eq!(effective, Some(PathBuf::from("/from/config.toml")));
    }
}
