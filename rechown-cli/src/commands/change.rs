//! Direct ownership changes.
//!
//! The owner argument is resolved before any path is touched; an unknown
//! user or group aborts the whole invocation.

use crate::cli::ChangeArgs;
use crate::error::CliError;
use rechown::{change_ownership, init_logger, OwnershipTarget, SystemBackend, SystemResolver};
use std::io;
use std::path::PathBuf;

/// Change the ownership of a list of paths.
pub struct ChangeCommand {
    /// Change flags.
    pub change: ChangeArgs,
    /// Owner argument, `USER[:GROUP]` and variants.
    pub owner: String,
    /// Paths to change.
    pub paths: Vec<PathBuf>,
}

impl ChangeCommand {
    /// Execute the change command.
    ///
    /// Per-entry failures are logged as they happen and collapse into
    /// [`CliError::ChangeFailed`] once every path has been processed.
    pub fn execute(self) -> Result<(), CliError> {
        let options = self.change.to_options()?;
        let target = OwnershipTarget::parse(&self.owner, &SystemResolver)?;
        let logger = init_logger(self.change.silent);
        logger.info(&format!(
            "changing {} path(s) to {target} ({}, {})",
            self.paths.len(),
            options.policy.link_mode,
            if options.policy.recurse { "recursive" } else { "single" }
        ));

        let stdout = io::stdout();
        let succeeded = change_ownership(
            &self.paths,
            target,
            &options,
            &SystemBackend,
            stdout.lock(),
            logger,
        );

        if succeeded {
            Ok(())
        } else {
            Err(CliError::ChangeFailed)
        }
    }
}
