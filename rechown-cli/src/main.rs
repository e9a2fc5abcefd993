//! Main entry point for the rechown CLI.
//!
//! `rechown [-R] [-h] [-L|-H|-P] [-v|-c] [-f] OWNER[:[GROUP]] FILE...`
//! changes ownership directly; `rechown -F SCRIPT` runs one such
//! invocation per script line.

use clap::Parser;
use rechown_cli::{Cli, CliError, Invocation};

fn main() {
    // Parse CLI arguments; usage errors exit here with code 2
    let cli = Cli::parse();

    let result = cli.invocation().and_then(|invocation| match invocation {
        Invocation::Change(cmd) => cmd.execute(),
        Invocation::Batch(cmd) => cmd.execute(),
    });

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        // Each failed entry has already been reported
        Err(CliError::ChangeFailed) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
