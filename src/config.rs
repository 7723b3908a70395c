//! Filter registration settings, optionally loaded from a TOML file.
//!
//! ```toml
//! namespace = "training.example"
//! enabled = ["to_upper", "remove_character"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::registry::FilterSet;

/// Which filters to register and under what names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Prefix for registered filter names. Dots become underscores, so
    /// `training.example` registers `training_example_to_upper`.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Filters to register. Empty registers all of them.
    #[serde(default)]
    pub enabled: Vec<String>,
}

impl FilterConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        tracing::debug!(?path, ?config, "Loaded filter config");
        Ok(config)
    }

    /// Parse and validate config from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the namespace is usable as an identifier prefix and every enabled
    /// filter exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ns) = &self.namespace {
            let starts_ok = ns
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
            let chars_ok = ns
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
            if !starts_ok || !chars_ok {
                return Err(ConfigError::InvalidNamespace {
                    namespace: ns.clone(),
                });
            }
        }

        for name in &self.enabled {
            if FilterSet::get(name).is_none() {
                return Err(ConfigError::UnknownFilter { name: name.clone() });
            }
        }
        Ok(())
    }

    pub fn is_enabled(&self, filter: &str) -> bool {
        self.enabled.is_empty() || self.enabled.iter().any(|name| name == filter)
    }

    /// Name a filter is registered under once the namespace is applied.
    pub fn registered_name(&self, filter: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{}_{filter}", ns.replace('.', "_")),
            None => filter.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unknown filter '{name}'")]
    UnknownFilter { name: String },
    #[error("invalid namespace '{namespace}': use letters, digits, '_' and '.', starting with a letter or '_'")]
    InvalidNamespace { namespace: String },
}
