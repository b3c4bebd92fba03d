//! Error types for tprompt.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all failures that end the program
//!   - [`ConfigError`] - Config file read/parse/validation failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`TuiError`] - Terminal/TUI rendering failures
//! - [`LoadError`] - Script reading failures (file not found, not UTF-8, editor, IO)
//!
//! # Error Recovery Strategy
//!
//! Load errors are **non-fatal**: they are shown as a dismissible notice and the current
//! script (the welcome text at startup) stays on screen. The scroll engine itself has
//! no error paths apart from refused state transitions.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}

/// Errors encountered when reading a script.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tprompt::model::error::LoadError;
///
/// let err = LoadError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.txt")
/// };
/// assert!(err.to_string().contains("/tmp/missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// The given path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file exists but is not valid UTF-8 text.
    #[error("Not a UTF-8 text file: {path}")]
    NotUtf8 {
        /// The offending file.
        path: PathBuf,
    },

    /// The external editor could not be run or exited unsuccessfully.
    #[error("Editor `{command}` failed: {reason}")]
    Editor {
        /// Editor command line.
        command: String,
        /// What went wrong.
        reason: String,
    },

    /// Any other I/O failure (permissions, disk errors, broken stdin).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
