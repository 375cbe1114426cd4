//! Build script for detect-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described here directly and must track src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("detect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths, optionally correcting their letter case")
        .long_about(
            "Check whether paths exist and print their canonical form, optionally \
             recovering the on-disk letter case of paths written with the wrong case",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("DETECT_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve paths to their canonical form")
                .long_about(
                    "Print the canonical form of each path that exists; with --nocase, \
                     fall back to matching directory entries case-insensitively",
                )
                .arg(Arg::new("paths").value_name("PATH").required(true).num_args(1..))
                .arg(
                    Arg::new("nocase")
                        .long("nocase")
                        .short('i')
                        .help("Fall back to case-insensitive matching when a path is not found")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format (text or json)"),
                ),
            Command::new("show-config")
                .about("Show the effective configuration")
                .arg(Arg::new("key").value_name("KEY")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("detect.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
