//! Error types for the `conway` binary.
//!
//! [`CliError`] is the top-level error type that wraps all possible
//! failure modes during startup, the menu session, and the run loop.

use crate::runner::RunError;

/// Top-level error for the `conway` binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: conway_core::ConfigError,
    },

    /// Board construction failed.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: conway_core::LifeError,
    },

    /// The run loop failed.
    #[error("run error: {source}")]
    Run {
        /// The underlying run loop error.
        #[from]
        source: RunError,
    },

    /// Reading the menu input or writing to the terminal failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
