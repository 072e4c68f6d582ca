//! Configuration for the LS-8 interpreter.
//!
//! This module defines the settings that parameterize a machine. It provides:
//! 1. **Defaults:** Behaviour matching a bare LS-8 (no tracing, SP starts at 0, no budget).
//! 2. **Structures:** A root [`Config`] with a [`GeneralConfig`] section.
//! 3. **Loading:** JSON deserialization, with every field optional.
//!
//! Use `Config::default()` when no configuration file is given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The JSON did not describe a valid configuration.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] if the text is not valid JSON or names an unknown field.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise any error from
    /// [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General execution settings.
///
/// Contains tracing, the initial stack pointer, and the instruction budget.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Write a `TRACE:` line to stderr before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Value written to `R7` at construction. `None` leaves it at 0 and
    /// expects the program to set up its own stack.
    #[serde(default)]
    pub initial_sp: Option<u8>,

    /// Abort after this many instructions retire without a halt. `None` runs unbounded.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}
