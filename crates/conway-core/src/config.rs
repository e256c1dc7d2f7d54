//! Configuration loading and typed config structures.
//!
//! The optional configuration file is `conway-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, and
//! provides a loader that reads and parses the file. Every field has a
//! default, so an empty document is a valid configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `conway-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LifeConfig {
    /// Board size and starting pattern.
    #[serde(default)]
    pub board: BoardConfig,

    /// Run loop pacing and bounds.
    #[serde(default)]
    pub run: RunConfig,

    /// Terminal rendering options.
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LifeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square board.
    #[serde(default = "default_dimension")]
    pub dimension: i64,

    /// `[x, y]` positions set live before the menu starts.
    #[serde(default)]
    pub initial_cells: Vec<[i64; 2]>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            initial_cells: Vec::new(),
        }
    }
}

/// Run loop configuration.
///
/// A value of 0 for `max_generations` means unlimited: the loop runs until
/// it is interrupted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Real-time milliseconds to wait between generations.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Maximum number of generations before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_generations: u64,

    /// End the run after a generation with no births and no deaths.
    #[serde(default)]
    pub stop_when_stable: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_generations: 0,
            stop_when_stable: false,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Draw the run loop with the numbered coordinate grid.
    #[serde(default)]
    pub show_coordinates: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_dimension() -> i64 {
    20
}

const fn default_tick_interval_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_owned()
}
