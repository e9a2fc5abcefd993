//! Build script for rechown-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id).short(short).help(help).action(ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("rechown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Change file owner and group")
        .long_about(
            "Change the owning user and/or group of each FILE to OWNER, optionally \
             recursing into directories, or run one such change per line of a script",
        )
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("script")
                .short('F')
                .value_name("SCRIPT")
                .help("Read invocations from SCRIPT, one per line ('-' for standard input)"),
        )
        .arg(flag("recursive", 'R', "Operate on directories recursively").long("recursive"))
        .arg(
            flag("no-dereference", 'h', "Affect symbolic links instead of any referenced file")
                .long("no-dereference"),
        )
        .arg(
            Arg::new("dereference")
                .long("dereference")
                .help("Affect the referent of each symbolic link (default without -R)")
                .action(ArgAction::SetTrue),
        )
        .arg(flag("traverse-all", 'L', "With -R, traverse every symbolic link to a directory"))
        .arg(flag(
            "traverse-command-line",
            'H',
            "With -R, follow a command-line symbolic link to a directory",
        ))
        .arg(flag("physical", 'P', "With -R, do not traverse any symbolic links (default)"))
        .arg(flag("verbose", 'v', "Report every file processed").long("verbose"))
        .arg(flag("changes", 'c', "Report only files whose ownership changes").long("changes"))
        .arg(
            flag("silent", 'f', "Suppress most error messages")
                .long("silent")
                .visible_alias("quiet"),
        )
        .arg(Arg::new("owner").value_name("OWNER[:[GROUP]]").help("New owner and/or group"))
        .arg(
            Arg::new("paths")
                .value_name("FILE")
                .num_args(1..)
                .help("Files to change"),
        )
        .after_help("Set RECHOWN_LOG_MODE=quiet|normal|verbose to control diagnostics.")
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man directory");

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("failed to render man page");

    fs::write(man_dir.join("rechown.1"), buffer).expect("failed to write man page");

    println!("cargo:rerun-if-changed=src/cli.rs");
}
