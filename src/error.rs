//! Error types for dirsweep.
//!
//! This module defines all error types used throughout dirsweep, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors are fatal and surface through [`SweepError`] before
//!   the tree walk starts
//! - Filesystem failures during the walk never propagate out of the core:
//!   they are caught at the failing node, logged, and counted in the run
//!   statistics
//! - Errors are automatically converted to `miette::Result` for CLI output

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in dirsweep operations
#[derive(Error, Debug, Diagnostic)]
pub enum SweepError {
    /// Invalid or missing configuration before the walk starts.
    ///
    /// Raised when required parameters are missing from a programmatically
    /// built [`crate::sweep::Sweep`], or when a flag value fails validation
    /// beyond what clap checks itself.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dirsweep::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// File system I/O error while listing or deleting a directory.
    ///
    /// Common causes: permission denied, the directory vanished between
    /// listing and deletion, or a plain I/O failure. Inside the walk these
    /// are caught and counted rather than propagated.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(dirsweep::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Verbosity value could not be parsed into a severity bitmask.
    ///
    /// Raised when `-v` is given a token that is neither `0`, a numeric
    /// bitmask in `1..=15`, nor a combination of the named severities
    /// (ERROR, WARNING, DELETION, INFORMATION).
    #[error("Invalid verbosity level: '{0}' - {1}")]
    #[diagnostic(
        code(dirsweep::verbosity::invalid),
        help(
            "Specify verbosity as a bitmask: a number (1=ERROR, 2=WARNING, 4=DELETION, \
             8=INFORMATION, combinable up to 15), names joined with ',' or '|' (e.g. \
             'ERROR|WARNING'), or 0 for no extra logging."
        )
    )]
    InvalidVerbosity(
        /// The verbosity token provided
        String,
        /// Description of the parsing error
        String,
    ),
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SweepError>;
