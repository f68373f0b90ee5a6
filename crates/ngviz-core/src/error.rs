//! Error types for the fallible edges of the crate

use std::path::PathBuf;

use thiserror::Error;

/// A numeric enum value outside the declared set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} discriminant: {value}")]
pub struct UnknownDiscriminant {
    pub kind: &'static str,
    pub value: u8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid framework path pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
