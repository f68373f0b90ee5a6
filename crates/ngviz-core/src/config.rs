//! Visualization options and their on-disk formats

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::identity::{ANGULAR_PATH_SEGMENT, IdentityResolver};
use crate::model::Themes;

/// User options for the renderer and the framework check.
///
/// Loaded from JSON, TOML or YAML; missing keys fall back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Draw library (node_modules) symbols.
    pub show_libs: bool,
    /// Draw module nodes.
    pub show_modules: bool,
    /// Name of the active theme.
    pub theme: String,
    pub themes: Themes,
    /// Regex matched against file paths to detect framework symbols.
    pub framework_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_libs: false,
            show_modules: true,
            theme: "Light".to_string(),
            themes: Themes::new(),
            framework_pattern: ANGULAR_PATH_SEGMENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load a config file, choosing the parser from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let parse: fn(&str) -> Result<Self, ConfigError> =
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => Self::from_json_str,
                Some("toml") => Self::from_toml_str,
                Some("yml") | Some("yaml") => Self::from_yaml_str,
                _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
            };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&contents)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`Config::load`], but a missing or broken file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Resolver using [`Config::framework_pattern`].
    pub fn resolver(&self) -> Result<IdentityResolver<Regex>, ConfigError> {
        IdentityResolver::from_pattern(&self.framework_pattern)
    }
}
