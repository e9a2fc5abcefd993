//! Batch script execution (`-F`).
//!
//! Every script line is parsed with the same flags as a direct invocation
//! and run in order. The first line that fails for any reason ends the
//! run; changes made by earlier lines are kept.

use crate::cli::BatchInvocation;
use crate::commands::ChangeCommand;
use crate::error::CliError;
use clap::Parser;
use rechown::batch::{open_script, MAX_ARGS};
use rechown::{init_logger, Logger};
use std::path::PathBuf;

/// Run a batch script.
pub struct BatchCommand {
    /// Script path, `-` for standard input.
    pub script: PathBuf,
}

impl BatchCommand {
    /// Execute the batch command.
    pub fn execute(self) -> Result<(), CliError> {
        let logger = init_logger(false);

        let mut executed = 0usize;
        for line in open_script(&self.script)? {
            let line = line?;
            logger.debug(&format!("line {}: {}", line.number, line.args.join(" ")));
            if line.dropped > 0 {
                logger.warn(&format!(
                    "line {}: ignoring {} arguments past the first {MAX_ARGS}",
                    line.number, line.dropped
                ));
            }

            let invocation = BatchInvocation::try_parse_from(&line.args).map_err(|error| {
                logger.error(&format!("line {}: {}", line.number, first_line(&error)));
                CliError::BatchLineFailed { line: line.number }
            })?;

            ChangeCommand::from(invocation)
                .execute()
                .map_err(|error| line_failed(&logger, line.number, &error))?;
            executed += 1;
        }

        logger.info(&format!("{executed} script line(s) completed"));
        Ok(())
    }
}

/// Logs why a line failed, unless the entries already did.
fn line_failed(logger: &Logger, number: usize, error: &CliError) -> CliError {
    if !matches!(error, CliError::ChangeFailed) {
        logger.error(&format!("line {number}: {error}"));
    }
    CliError::BatchLineFailed { line: number }
}

/// The message of a clap error without the usage text that follows it.
fn first_line(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let message = rendered.lines().next().unwrap_or_default();
    message.trim_start_matches("error: ").to_string()
}
