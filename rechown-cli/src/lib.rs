//! Library exports for rechown-cli.
//!
//! This module exports the CLI structure for use by the binary and by
//! tests of the argument grammar.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Invocation};
pub use error::CliError;
