//! Shortcut backup and restore.
//!
//! A backup is a plain directory of byte-for-byte copies; the directory tree
//! itself is the record, no manifest file is written. Both directions
//! preserve each shortcut's path relative to its root, so a backup restores
//! exactly where it came from.

use crate::config::BackupConfig;
use crate::error::{MenumendError, Result};
use crate::platform::{Location, RootLocation, StartMenuPaths};
use crate::scan::{self, Scanner};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of a completed backup.
#[derive(Debug, Clone, Serialize)]
pub struct BackupSummary {
    pub backup_dir: PathBuf,
    pub count: usize,
}

/// Per-file entry of a restore pass.
#[derive(Debug, Clone, Serialize)]
pub struct RestoreResult {
    pub name: String,
    pub success: bool,
    pub message: String,
}

/// Aggregated outcome of a restore pass.
#[derive(Debug, Clone, Serialize)]
pub struct RestoreReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub results: Vec<RestoreResult>,
}

impl RestoreReport {
    /// Zero-count single-error report for the fail-fast guards.
    fn fail_fast(message: impl Into<String>) -> Self {
        Self {
            success_count: 0,
            failed_count: 0,
            results: vec![RestoreResult {
                name: String::new(),
                success: false,
                message: message.into(),
            }],
        }
    }
}

/// Copies shortcut collections out of and back into the Start Menu roots.
pub struct BackupManager {
    paths: StartMenuPaths,
}

impl BackupManager {
    pub fn new(paths: StartMenuPaths) -> Self {
        Self { paths }
    }

    /// Copy every accessible shortcut into a backup directory.
    ///
    /// Without an explicit `backup_dir` a timestamped directory under the
    /// user's home is generated (second granularity; two calls within the
    /// same second merge into one directory). Relative subfolder paths are
    /// preserved under the backup directory; shortcuts with the same
    /// relative path under both roots collide and the later copy wins.
    ///
    /// Any failure aborts the whole operation.
    pub fn backup_shortcuts(&self, backup_dir: Option<PathBuf>) -> Result<BackupSummary> {
        let backup_dir = match backup_dir {
            Some(dir) => dir,
            None => Self::default_backup_dir()?,
        };

        fs::create_dir_all(&backup_dir)
            .map_err(|e| MenumendError::io_op("create backup directory", &backup_dir, e))?;

        let scanner = Scanner::new(self.paths.clone());
        let mut count = 0;

        for (_, root) in scanner.candidate_roots(Location::Both) {
            for shortcut in scan::find_in_dir(&root) {
                let relative = match shortcut.strip_prefix(&root) {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => shortcut.file_name().map(PathBuf::from).unwrap_or_default(),
                };
                let dest = backup_dir.join(&relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| MenumendError::io_op("create backup subfolder", parent, e))?;
                }
                if dest.exists() {
                    warn!(
                        "Backup entry {} collides across roots; overwriting",
                        relative.display()
                    );
                }

                fs::copy(&shortcut, &dest)
                    .map_err(|e| MenumendError::io_op("copy shortcut to backup", &shortcut, e))?;
                count += 1;
            }
        }

        info!(
            "Backed up {} shortcut(s) to {}",
            count,
            backup_dir.display()
        );
        Ok(BackupSummary { backup_dir, count })
    }

    /// Restore a backup into one Start Menu root.
    ///
    /// Fails fast with a zero-count single-error report when the backup
    /// directory is missing or the common root is requested without
    /// privilege. Otherwise each file copy is attempted independently: one
    /// failure is recorded and does not abort the rest.
    pub fn restore_shortcuts(&self, backup_dir: &Path, location: RootLocation) -> RestoreReport {
        if !backup_dir.exists() {
            return RestoreReport::fail_fast("Backup directory not found");
        }
        if location == RootLocation::Common && !self.paths.is_privileged() {
            return RestoreReport::fail_fast(
                "Administrator privileges required to restore to All Users",
            );
        }

        let dest_root = self.paths.root(location);
        let mut report = RestoreReport {
            success_count: 0,
            failed_count: 0,
            results: Vec::new(),
        };

        for shortcut in scan::find_in_dir(backup_dir) {
            let name = shortcut
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let Ok(relative) = shortcut.strip_prefix(backup_dir) else {
                continue;
            };
            let dest = dest_root.join(relative);

            match copy_into_place(&shortcut, &dest) {
                Ok(()) => {
                    report.success_count += 1;
                    report.results.push(RestoreResult {
                        name,
                        success: true,
                        message: format!("Restored to {}", dest.display()),
                    });
                }
                Err(e) => {
                    report.failed_count += 1;
                    report.results.push(RestoreResult {
                        name,
                        success: false,
                        message: format!("Failed to restore: {}", e),
                    });
                }
            }
        }

        info!(
            "Restored {} shortcut(s) to {} root, {} failed",
            report.success_count, location, report.failed_count
        );
        report
    }

    fn default_backup_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| MenumendError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        let stamp = chrono::Local::now().format(BackupConfig::TIMESTAMP_FORMAT);
        Ok(home.join(format!("{}_{}", BackupConfig::DIR_PREFIX, stamp)))
    }
}

/// Copy one file, creating intermediate directories as needed.
fn copy_into_place(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| MenumendError::io_op("create destination folder", parent, e))?;
    }
    fs::copy(src, dest).map_err(|e| MenumendError::io_op("copy shortcut", src, e))?;
    Ok(())
}
