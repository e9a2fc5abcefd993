//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use rechown::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid combination of command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// At least one entry could not be changed. The entries have already
    /// been reported.
    ChangeFailed,

    /// A batch script line failed and the script was abandoned.
    BatchLineFailed {
        /// One-based script line number.
        line: usize,
    },
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: A change, owner argument, script, or I/O failure
    /// - 2: Invalid arguments (matches clap's usage errors)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArguments(_) => 2,
            CliError::Library(_)
            | CliError::Io(_)
            | CliError::ChangeFailed
            | CliError::BatchLineFailed { .. } => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::ChangeFailed => write!(f, "some ownership changes failed"),
            CliError::BatchLineFailed { line } => write!(f, "script stopped at line {line}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => CliError::Io(io),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
