//! Error types for the rechown library.
//!
//! This module provides the error hierarchy for owner parsing, id
//! resolution, and batch script handling, using `thiserror` for ergonomic
//! error handling. Per-entry ownership failures during a walk are not
//! errors in this sense: they are reported and folded into the walk's
//! boolean result.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a rechown error.
///
/// # Examples
///
/// ```
/// use rechown::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(1000)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rechown library.
#[derive(Debug, Error)]
pub enum Error {
    /// The `OWNER[:[GROUP]]` argument could not be parsed.
    #[error("invalid owner spec '{spec}': {reason}")]
    InvalidOwnerSpec {
        /// The spec as given on the command line.
        spec: String,
        /// The reason the spec is invalid.
        reason: String,
    },

    /// No user with the given name exists.
    #[error("unknown user {name}")]
    UnknownUser {
        /// The user name that failed to resolve.
        name: String,
    },

    /// No group with the given name exists.
    #[error("unknown group {name}")]
    UnknownGroup {
        /// The group name that failed to resolve.
        name: String,
    },

    /// The user or group database could not be queried.
    #[error("failed to look up '{name}': {source}")]
    IdLookup {
        /// The name being looked up.
        name: String,
        /// The underlying errno.
        #[source]
        source: nix::Error,
    },

    /// A batch script line exceeded the line buffer.
    #[error("line {line} is longer than {limit} bytes")]
    LineTooLong {
        /// One-based line number.
        line: usize,
        /// The maximum accepted line length, excluding the terminator.
        limit: usize,
    },

    /// A batch script line was not valid UTF-8.
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 {
        /// One-based line number.
        line: usize,
    },

    /// The batch script could not be opened.
    #[error("cannot open script {}: {source}", path.display())]
    ScriptOpen {
        /// The script path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_owner_spec_error() {
        let err = Error::InvalidOwnerSpec {
            spec: ".staff".to_string(),
            reason: "missing user before '.'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid owner spec"));
        assert!(display.contains(".staff"));
        assert!(display.contains("missing user"));
    }

    #[test]
    fn test_unknown_user_and_group_errors() {
        let user = Error::UnknownUser {
            name: "ghost".to_string(),
        };
        assert_eq!(format!("{user}"), "unknown user ghost");

        let group = Error::UnknownGroup {
            name: "phantoms".to_string(),
        };
        assert_eq!(format!("{group}"), "unknown group phantoms");
    }

    #[test]
    fn test_line_too_long_error() {
        let err = Error::LineTooLong {
            line: 3,
            limit: 2046,
        };
        let display = format!("{err}");
        assert!(display.contains("line 3"));
        assert!(display.contains("2046"));
    }

    #[test]
    fn test_script_open_error_names_path() {
        let err = Error::ScriptOpen {
            path: PathBuf::from("/no/such/script"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let display = format!("{err}").replace(std::path::MAIN_SEPARATOR, "/");
        assert!(display.contains("/no/such/script"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
