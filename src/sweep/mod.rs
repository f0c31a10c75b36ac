//! The tree cleaner: depth-first removal of empty directories.
//!
//! A sweep visits a root directory, optionally recurses into its
//! subdirectories first, and deletes every directory whose post-recursion
//! listing contains no files and no subdirectories. Deletions therefore
//! cascade bottom-up: a directory that only held now-deleted empty
//! subdirectories becomes eligible itself.
//!
//! Nothing in the walk aborts the run. Every filesystem failure is caught at
//! the failing node, logged, and counted; the walk continues with siblings
//! and ancestors and always produces a final [`SweepStats`].
//!
//! # Example
//!
//! ```no_run
//! use dirsweep::logging::Verbosity;
//! use dirsweep::sweep::Sweep;
//!
//! let sweep = Sweep::builder()
//!     .root("path/to/tree")
//!     .recurse(true)
//!     .verbosity(Verbosity::ERROR | Verbosity::DELETION)
//!     .build()?;
//!
//! let stats = sweep.run();
//! println!("deleted {} directories", stats.deleted);
//! # Ok::<(), dirsweep::error::SweepError>(())
//! ```

pub mod config;
mod walk;

#[cfg(test)]
mod tests;

pub use config::{Sweep, SweepBuilder, SweepStats};
