use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use suggest_common::types::{InvalidThreshold, DEFAULT_HIGHLIGHT_CLASS};
use suggest_common::{ClusterConfig, Granularity, HighlightStyle, Threshold};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    InvalidThreshold(#[from] InvalidThreshold),
}

/// On-disk layout of `config.toml`.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub clustering: ClusteringSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClusteringSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_class: Option<String>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The fully populated default config, as written by `init-config`.
    pub fn defaults() -> Self {
        let config = ClusterConfig::default();
        Self {
            clustering: ClusteringSection {
                threshold: Some(config.threshold.value()),
                granularity: Some(config.granularity),
                highlight_class: Some(DEFAULT_HIGHLIGHT_CLASS.to_string()),
            },
        }
    }

    /// Layer the file values and then the overrides on top of the defaults.
    pub fn resolve(&self, overrides: &Overrides) -> Result<ClusterConfig, ConfigError> {
        let mut config = ClusterConfig::default();
        let section = &self.clustering;

        if let Some(t) = overrides.threshold.or(section.threshold) {
            config.threshold = Threshold::try_from(t)?;
        }
        if let Some(g) = overrides.granularity.or(section.granularity) {
            config.granularity = g;
        }
        if let Some(class) = &section.highlight_class {
            config.highlight = HighlightStyle {
                class: class.clone(),
            };
        }
        Ok(config)
    }
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub threshold: Option<f64>,
    pub granularity: Option<Granularity>,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("suggest-diff");
    p.push("config.toml");
    Some(p)
}

/// Load the config file. An explicit path must exist; a missing file at the
/// default location just means defaults.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("No config file found, using defaults");
                return Ok(FileConfig::default());
            }
        },
    };

    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    FileConfig::parse(&text)
}
