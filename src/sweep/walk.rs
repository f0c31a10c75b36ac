use std::fs;
use std::path::{Path, PathBuf};

use super::config::{Sweep, SweepStats};
use crate::error::{Result, SweepError};
use crate::logging::{Logger, Severity};

/// Visit one directory and, if it ends up empty, delete it.
///
/// Failures inside the visit are caught here: they are logged with the
/// failing path, counted in `stats.errors`, and do not propagate, so one
/// broken node never aborts the walk.
pub(crate) fn sweep_dir(
    dir: &Path,
    depth: usize,
    config: &Sweep,
    log: &mut Logger,
    stats: &mut SweepStats,
) {
    if let Err(err) = visit(dir, depth, config, log, stats) {
        let detail = match &err {
            SweepError::IoError { source, .. } => source.to_string(),
            other => other.to_string(),
        };
        log.log(
            Severity::Error,
            depth,
            format!("'{detail}' @ '{}'", dir.display()),
        );
        stats.errors += 1;
    }
}

fn visit(
    dir: &Path,
    depth: usize,
    config: &Sweep,
    log: &mut Logger,
    stats: &mut SweepStats,
) -> Result<()> {
    log.log(
        Severity::Information,
        depth,
        format!("BEGIN {}", dir.display()),
    );

    if !dir.is_dir() {
        log.log(
            Severity::Error,
            depth,
            format!("Directory does not exist '{}'", dir.display()),
        );
        stats.errors += 1;
        return Ok(());
    }

    if config.recurse() {
        // Children are visited in filesystem listing order, which is not
        // guaranteed to be stable.
        for child in list_subdirectories(dir)? {
            sweep_dir(&child, depth + 1, config, log, stats);
        }
    }

    // A fresh listing decides deletion. It must observe whatever the
    // recursion above just removed, so the pre-recursion listing cannot be
    // reused here.
    let (files, subdirs) = count_entries(dir)?;
    if files == 0 && subdirs == 0 {
        fs::remove_dir(dir).map_err(|source| SweepError::IoError {
            path: dir.to_path_buf(),
            source,
        })?;
        log.log(
            Severity::Deletion,
            depth,
            format!("DELETED {}", dir.display()),
        );
        stats.deleted += 1;
    } else {
        log.log(
            Severity::Warning,
            depth,
            format!(
                "IGNORED {} ({files} files, {subdirs} subdirectories)",
                dir.display()
            ),
        );
        stats.ignored += 1;
    }

    log.log(
        Severity::Information,
        depth,
        format!("FINISHED {}", dir.display()),
    );

    Ok(())
}

/// List the immediate child directories of `dir`.
///
/// Entry types are read without following symlinks, so a symlink to a
/// directory is treated as an ordinary entry and never descended into.
fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();

    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| SweepError::IoError {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| SweepError::IoError {
            path: entry.path(),
            source,
        })?;

        if file_type.is_dir() {
            subdirs.push(entry.path());
        }
    }

    Ok(subdirs)
}

/// Count the immediate files and subdirectories of `dir`.
///
/// Anything that is not a directory (regular file, symlink, socket, ...)
/// counts as a file: any entry at all blocks deletion.
fn count_entries(dir: &Path) -> Result<(usize, usize)> {
    let mut files = 0;
    let mut subdirs = 0;

    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| SweepError::IoError {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| SweepError::IoError {
            path: entry.path(),
            source,
        })?;

        if file_type.is_dir() {
            subdirs += 1;
        } else {
            files += 1;
        }
    }

    Ok((files, subdirs))
}

fn read_dir(dir: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(dir).map_err(|source| SweepError::IoError {
        path: dir.to_path_buf(),
        source,
    })
}
