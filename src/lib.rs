//! # dirsweep
//!
//! A filesystem maintenance tool that removes directories containing no
//! files and no subdirectories, optionally recursing into subdirectories
//! first so that deletions cascade upward: a directory that only held
//! now-deleted empty subdirectories becomes eligible for deletion itself.
//!
//! ## Key Behaviors
//!
//! - **Fresh listing before deletion**: a directory is deleted only if a
//!   listing taken after any recursive descent shows zero entries
//! - **Non-recursive delete**: only `std::fs::remove_dir` is ever used, so a
//!   race that repopulates a directory makes the delete fail safely
//! - **Fault-tolerant walk**: filesystem failures are counted and logged per
//!   node; the walk always completes and always produces a summary
//! - **Bitmask verbosity**: severities (ERROR, WARNING, DELETION,
//!   INFORMATION) can be enabled in any combination, with suppressed lines
//!   counted
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Execution of a sweep from parsed CLI arguments
//! - [`error`]: Error types and handling with thiserror + miette
//! - [`logging`]: Severity-filtered, depth-indented logging
//! - [`sweep`]: The tree cleaner core
//!
//! ## Library Usage
//!
//! While dirsweep is primarily a CLI tool, the core is usable as a library:
//!
//! ```no_run
//! use dirsweep::logging::Verbosity;
//! use dirsweep::sweep::Sweep;
//!
//! let stats = Sweep::builder()
//!     .root("path/to/tree")
//!     .recurse(true)
//!     .verbosity(Verbosity::ERROR)
//!     .build()?
//!     .run();
//!
//! println!(
//!     "deleted {}, ignored {}, errors {}",
//!     stats.deleted, stats.ignored, stats.errors
//! );
//! # Ok::<(), dirsweep::error::SweepError>(())
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in the CLI
//!
//! Configuration failures are the only fatal errors; everything the walk
//! encounters is converted into counted, logged, per-node errors.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod sweep;
