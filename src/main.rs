//! # dirsweep CLI
//!
//! The command-line interface for dirsweep, a filesystem maintenance tool
//! that removes directories containing no files and no subdirectories.
//!
//! ## Usage
//!
//! ```bash
//! # Delete the directory itself if it is empty
//! dirsweep -d path/to/tree
//!
//! # Recurse so empty subtrees collapse bottom-up, logging deletions
//! dirsweep -d path/to/tree -s -v DELETION
//!
//! # Enable several severities at once (bitmask: ERROR=1, WARNING=2,
//! # DELETION=4, INFORMATION=8)
//! dirsweep -d path/to/tree -s -v 7
//! ```
//!
//! The run always completes and prints a summary of directories deleted,
//! directories ignored, errors encountered, and log lines suppressed by the
//! verbosity filter.

use std::io::IsTerminal;

use clap::Parser;
use dirsweep::cli::Cli;

fn main() -> miette::Result<()> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    // Configure miette handler based on terminal capabilities
    // This provides better error formatting for both TTY and non-TTY environments
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Use a simpler handler for non-TTY environments (CI, logs, etc.)
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    // Parse command line arguments
    let cli = Cli::parse();

    // Run the sweep
    let result = dirsweep::commands::execute(&cli);

    // Convert our error type to miette's Result
    result.map_err(Into::into)
}
