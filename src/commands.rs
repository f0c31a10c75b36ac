//! Top-level command execution for dirsweep.
//!
//! The binary has a single operation: build a [`Sweep`] from the parsed CLI
//! arguments, run it, and print the summary block. This module is also the
//! entry point for library users who want CLI-equivalent behavior.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use dirsweep::cli::Cli;
//! use dirsweep::commands;
//!
//! let cli = Cli::parse();
//! if let Err(e) = commands::execute(&cli) {
//!     eprintln!("Error: {e:?}");
//! }
//! ```

use crate::cli::Cli;
use crate::error::Result;
use crate::sweep::{Sweep, SweepStats};

/// Execute a sweep based on the parsed CLI arguments.
///
/// Runs the tree walk and prints the summary block with the four run
/// counters. The walk itself never fails; only building an invalid
/// configuration returns an error.
pub fn execute(cli: &Cli) -> Result<()> {
    let sweep = Sweep::builder()
        .root(cli.dir())
        .recurse(cli.subdirs())
        .verbosity(cli.verbosity())
        .build()?;

    println!();
    println!("Starting sweep...");
    println!();

    let stats = sweep.run();

    print_summary(&stats);

    Ok(())
}

fn print_summary(stats: &SweepStats) {
    println!();
    println!("Deleted directories:              {}", stats.deleted);
    println!("Ignored directories:              {}", stats.ignored);
    println!("Errors occurred:                  {}", stats.errors);
    println!("Log messages suppressed:          {}", stats.suppressed);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_execute_sweeps_configured_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir_all(root.join("empty")).unwrap();

        let cli = Cli::parse_from([
            "dirsweep",
            "-d",
            root.to_str().unwrap(),
            "-s",
        ]);

        execute(&cli).unwrap();

        // The empty child and the then-empty root both collapse.
        assert!(!root.exists());
    }

    #[test]
    fn test_execute_without_recursion_touches_only_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir_all(root.join("empty")).unwrap();

        let cli = Cli::parse_from(["dirsweep", "-d", root.to_str().unwrap()]);

        execute(&cli).unwrap();

        assert!(root.join("empty").exists());
    }
}
