//! CLI structure and argument definitions.
//!
//! Two parsers share the change flags in [`ChangeArgs`]: [`Cli`] for the
//! process command line and [`BatchInvocation`] for one line of a `-F`
//! script, which has no program name and cannot nest another script.

use crate::commands::{BatchCommand, ChangeCommand};
use crate::error::CliError;
use clap::{ArgAction, Args, Parser};
use rechown::{ChangeOptions, LinkMode, Reporting, TraversalPolicy};
use std::path::PathBuf;

/// Change the owning user and/or group of files.
#[derive(Parser)]
#[command(name = "rechown")]
#[command(version, about = "Change file owner and group", long_about = None)]
#[command(disable_help_flag = true, args_override_self = true)]
#[command(after_help = "OWNER is USER, USER:, USER:GROUP, :GROUP or : \
    (also USER.GROUP), with names or numeric ids.\n\
    Set RECHOWN_LOG_MODE=quiet|normal|verbose to control diagnostics.")]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Read invocations from SCRIPT, one per line ('-' for standard input)
    #[arg(
        short = 'F',
        value_name = "SCRIPT",
        conflicts_with_all = [
            "owner", "paths", "recursive", "no_dereference", "dereference",
            "traverse_all", "traverse_command_line", "physical",
            "verbose", "changes", "silent",
        ]
    )]
    pub script: Option<PathBuf>,

    #[command(flatten)]
    pub change: ChangeArgs,

    /// New owner and/or group
    #[arg(value_name = "OWNER[:[GROUP]]", required_unless_present = "script")]
    pub owner: Option<String>,

    /// Files to change
    #[arg(value_name = "FILE", required_unless_present = "script")]
    pub paths: Vec<PathBuf>,
}

/// What a parsed command line asks for.
pub enum Invocation {
    /// Change the given paths directly.
    Change(ChangeCommand),
    /// Run a batch script.
    Batch(BatchCommand),
}

impl Cli {
    /// Splits the command line into the command to run.
    pub fn invocation(self) -> Result<Invocation, CliError> {
        if let Some(script) = self.script {
            return Ok(Invocation::Batch(BatchCommand { script }));
        }
        let owner = self
            .owner
            .ok_or_else(|| CliError::InvalidArguments("missing OWNER operand".to_string()))?;
        Ok(Invocation::Change(ChangeCommand {
            change: self.change,
            owner,
            paths: self.paths,
        }))
    }
}

/// One line of a batch script, parsed like a command line without `-F`.
#[derive(Parser)]
#[command(name = "rechown", no_binary_name = true)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct BatchInvocation {
    #[command(flatten)]
    pub change: ChangeArgs,

    /// New owner and/or group
    #[arg(value_name = "OWNER[:[GROUP]]")]
    pub owner: String,

    /// Files to change
    #[arg(value_name = "FILE", required = true)]
    pub paths: Vec<PathBuf>,
}

impl From<BatchInvocation> for ChangeCommand {
    fn from(invocation: BatchInvocation) -> Self {
        Self {
            change: invocation.change,
            owner: invocation.owner,
            paths: invocation.paths,
        }
    }
}

/// Flags controlling a single ownership change.
#[derive(Args, Debug, Clone, Default)]
pub struct ChangeArgs {
    /// Operate on directories recursively
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Affect symbolic links instead of any referenced file
    #[arg(short = 'h', long, overrides_with = "dereference")]
    pub no_dereference: bool,

    /// Affect the referent of each symbolic link (default without -R)
    #[arg(long, overrides_with = "no_dereference")]
    pub dereference: bool,

    /// With -R, traverse every symbolic link to a directory
    #[arg(short = 'L', overrides_with_all = ["traverse_command_line", "physical"])]
    pub traverse_all: bool,

    /// With -R, follow a command-line symbolic link to a directory
    #[arg(short = 'H', overrides_with_all = ["traverse_all", "physical"])]
    pub traverse_command_line: bool,

    /// With -R, do not traverse any symbolic links (default)
    #[arg(short = 'P', overrides_with_all = ["traverse_all", "traverse_command_line"])]
    pub physical: bool,

    /// Report every file processed
    #[arg(short = 'v', long, overrides_with = "changes")]
    pub verbose: bool,

    /// Report only files whose ownership changes
    #[arg(short = 'c', long, overrides_with = "verbose")]
    pub changes: bool,

    /// Suppress most error messages
    #[arg(short = 'f', long = "silent", visible_alias = "quiet")]
    pub silent: bool,
}

impl ChangeArgs {
    /// The symlink traversal mode selected by `-L`, `-H` or `-P`.
    pub fn link_mode(&self) -> LinkMode {
        if self.traverse_all {
            LinkMode::FollowAll
        } else if self.traverse_command_line {
            LinkMode::FollowCommandLine
        } else {
            LinkMode::NoFollow
        }
    }

    /// Converts the flags into library options.
    ///
    /// `--dereference` cannot be honored by a physical recursive walk, so
    /// that combination is rejected.
    pub fn to_options(&self) -> Result<ChangeOptions, CliError> {
        let link_mode = self.link_mode();
        if self.recursive && self.dereference && link_mode == LinkMode::NoFollow {
            return Err(CliError::InvalidArguments(
                "-R --dereference requires -H or -L".to_string(),
            ));
        }

        let policy = if self.recursive {
            TraversalPolicy::recursive()
        } else {
            TraversalPolicy::single()
        }
        .with_link_mode(link_mode);

        let reporting = if self.verbose {
            Reporting::All
        } else if self.changes {
            Reporting::Changes
        } else {
            Reporting::Off
        };

        Ok(ChangeOptions::new(policy)
            .with_no_dereference(self.no_dereference)
            .with_reporting(reporting)
            .with_quiet(self.silent))
    }
}
