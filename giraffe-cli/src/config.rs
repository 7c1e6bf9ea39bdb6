//! Configuration handling for the giraffe CLI
//!
//! Supports loading configuration from giraffe.toml files with CLI argument overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print exported JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Layer given to plain features that do not name one
    #[serde(default = "default_layer")]
    pub default_layer: String,
}

fn default_true() -> bool { true }
fn default_layer() -> String { "Features".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: default_true() }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self { default_layer: default_layer() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from("giraffe.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: giraffe.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::io(format!("Failed to read configuration file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            CliError::config(format!("Failed to parse configuration file {}: {}", path.display(), e))
        })
    }

    pub fn save_to_file(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|e| {
            CliError::io(format!("Failed to write configuration file {}: {}", path.display(), e))
        })?;

        log::info!("Wrote configuration to: {}", path.display());
        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> CliResult<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }
}
