//! Configuration file loading for the opening trainer.
//!
//! Settings come from `trainer.toml` in the working directory when it
//! exists; command-line flags override individual keys.

use std::path::{Path, PathBuf};

use chess_openings::{example_opening, OpeningTree, TreeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Trainer settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TrainerConfig {
    /// Opening tree JSON file. The built-in example is used when unset.
    #[serde(default)]
    pub opening: Option<PathBuf>,
    /// Where to write the built-in example opening before training starts.
    #[serde(default)]
    pub save_example: Option<PathBuf>,
    /// Draw pieces as Unicode glyphs rather than letters. Defaults to true.
    #[serde(default = "default_unicode")]
    pub unicode: bool,
    /// Default `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seed for the computer's move choice; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_unicode() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            opening: None,
            save_example: None,
            unicode: default_unicode(),
            log_level: default_log_level(),
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Loads the configuration at `path`, or the defaults if there is no
    /// file there.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `trainer.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("trainer.toml")
    }

    /// Loads the configured opening tree.
    ///
    /// A missing file falls back to the built-in example; a file that exists
    /// but does not parse is an error.
    pub fn opening_tree(&self) -> Result<OpeningTree, TreeError> {
        let Some(path) = &self.opening else {
            return Ok(example_opening());
        };
        match OpeningTree::load_from_file(path) {
            Ok(tree) => {
                tracing::info!(path = %path.display(), positions = tree.len(), "loaded opening");
                Ok(tree)
            }
            Err(TreeError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "opening file not found, using example opening");
                Ok(example_opening())
            }
            Err(e) => Err(e),
        }
    }
}
