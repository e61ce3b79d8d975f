use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::case::Case;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub split: SplitConfig,
}

/// Convert configuration - which case to produce and how to treat input lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Target case when none is given on the command line
    #[serde(default)]
    pub case: Case,
    /// Drop blank input lines instead of echoing them
    #[serde(default = "default_skip_blank")]
    pub skip_blank: bool,
}

/// Split configuration - how words are printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Placed between the words of one identifier
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_skip_blank() -> bool {
    true
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            case: Case::default(),
            skip_blank: default_skip_blank(),
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            separator: default_separator(),
        }
    }
}

/// Output is one identifier per line, so the separator must stay on one line
pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.contains(['\n', '\r']) {
        anyhow::bail!("Split separator must not contain a line break");
    }

    Ok(())
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        validate_separator(&self.split.separator)
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config::default()
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
