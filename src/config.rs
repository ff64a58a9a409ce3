//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/zkseq/zkseq.toml`
//! 3. Environment variables: `ZKSEQ_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// What to label tree nodes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeText {
    /// The key only
    Id,
    /// The title, falling back to the key
    Title,
    /// `key: title`
    #[default]
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default index file used when a command gets no FILE argument
    pub index_file: Option<PathBuf>,
    /// Tree node label mode
    pub node_text: NodeText,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index_file: None,
            node_text: NodeText::Both,
        }
    }
}

impl Settings {
    /// Path of the global config file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "zkseq").map(|dirs| dirs.config_dir().join("zkseq.toml"))
    }

    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("ZKSEQ"));

        builder.build()?.try_deserialize()
    }

    /// Serialize the current settings as a TOML template.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
