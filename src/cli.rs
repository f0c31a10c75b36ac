//! Command-line interface definitions for dirsweep.
//!
//! This module defines the CLI structure using clap. The surface is small:
//! a required root directory, a recursion switch, and a verbosity mask.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use dirsweep::cli::Cli;
//!
//! let cli = Cli::parse();
//! println!("sweeping {}", cli.dir().display());
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::logging::Verbosity;

/// Command-line interface for dirsweep.
///
/// Invoking the binary with no arguments prints the usage text and exits
/// without running the sweep, as does `--help`.
#[derive(Debug, Parser)]
#[command(
    name = "dirsweep",
    bin_name = "dirsweep",
    author,
    version,
    about = "Removes empty directories from a directory tree",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Root directory to search through
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        value_parser = parse_root_dir
    )]
    dir: PathBuf,

    /// Include subdirectories, so empty trees collapse bottom-up
    #[arg(short = 's', long = "subdirs")]
    subdirs: bool,

    /// Verbosity: 0 for no extra logging (default), a numeric bitmask
    /// (1=ERROR, 2=WARNING, 4=DELETION, 8=INFORMATION, combinable up to
    /// 15), or severity names joined with ',' or '|' (e.g. ERROR|WARNING)
    #[arg(
        short = 'v',
        long = "verbosity",
        value_name = "LEVEL",
        default_value = "0"
    )]
    verbosity: Verbosity,
}

impl Cli {
    /// Get the root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check if subdirectory recursion is enabled
    pub fn subdirs(&self) -> bool {
        self.subdirs
    }

    /// Get the verbosity mask
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

/// Reject empty and whitespace-only directory values before they reach the
/// core.
fn parse_root_dir(value: &str) -> Result<PathBuf, String> {
    if value.trim().is_empty() {
        return Err("directory must not be empty or whitespace".to_string());
    }
    Ok(PathBuf::from(value))
}
