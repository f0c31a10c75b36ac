use std::path::{Path, PathBuf};

use super::walk;
use crate::error::{Result, SweepError};
use crate::logging::{Logger, Verbosity};

/// A configured sweep over one directory tree
#[derive(Debug)]
pub struct Sweep {
    /// Root directory to sweep
    root: PathBuf,
    /// Recurse into subdirectories so deletions cascade bottom-up
    recurse: bool,
    /// Which log severities to print
    verbosity: Verbosity,
}

impl Sweep {
    /// Creates a new builder for [`Sweep`]
    pub fn builder() -> SweepBuilder {
        SweepBuilder::default()
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if subdirectory recursion is enabled
    pub fn recurse(&self) -> bool {
        self.recurse
    }

    /// Get the verbosity mask
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Run the sweep.
    ///
    /// Walks the tree depth-first, deleting every directory that is empty
    /// after its children have been visited. Never fails: filesystem errors
    /// are counted per node and the walk always completes.
    ///
    /// # Returns
    ///
    /// Statistics about the sweep: directories deleted, directories ignored
    /// because they were non-empty, errors encountered, and log messages
    /// suppressed by the verbosity filter.
    pub fn run(&self) -> SweepStats {
        let mut log = Logger::new(self.verbosity);
        let mut stats = SweepStats::default();

        // The root call is depth 1, matching the indentation of its log
        // output.
        walk::sweep_dir(&self.root, 1, self, &mut log, &mut stats);

        stats.suppressed = log.suppressed();
        stats
    }
}

/// Builder for [`Sweep`]
#[derive(Debug, Default)]
pub struct SweepBuilder {
    root: Option<PathBuf>,
    recurse: bool,
    verbosity: Verbosity,
}

impl SweepBuilder {
    /// Set the root directory
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = Some(dir.into());
        self
    }

    /// Enable or disable subdirectory recursion
    pub fn recurse(mut self, enabled: bool) -> Self {
        self.recurse = enabled;
        self
    }

    /// Set the verbosity mask
    pub fn verbosity(mut self, mask: Verbosity) -> Self {
        self.verbosity = mask;
        self
    }

    /// Build the [`Sweep`]
    pub fn build(self) -> Result<Sweep> {
        Ok(Sweep {
            root: self.root.ok_or_else(|| SweepError::ConfigError {
                message: "root directory is required".to_string(),
            })?,
            recurse: self.recurse,
            verbosity: self.verbosity,
        })
    }
}

/// Statistics about one sweep run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Number of directories deleted
    pub deleted: u64,
    /// Number of directories ignored because they were non-empty
    pub ignored: u64,
    /// Number of errors encountered during the walk
    pub errors: u64,
    /// Number of log messages suppressed by the verbosity filter
    pub suppressed: u64,
}
