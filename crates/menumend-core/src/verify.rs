//! Shortcut verification.
//!
//! Resolves each discovered shortcut's stored target through the store
//! adapter and classifies it. A target is valid iff a file system entry
//! exists at the stored path; failure to read the target at all is
//! classified separately from a target that resolves but points nowhere.

use crate::platform::{Location, StartMenuPaths};
use crate::scan::Scanner;
use crate::store::{PlatformStore, ShortcutStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of verifying one shortcut.
#[derive(Debug, Clone, Serialize)]
pub struct ShortcutRecord {
    /// Shortcut file name.
    pub name: String,
    /// Full path of the shortcut file.
    pub path: PathBuf,
    /// Stored target, when it could be read.
    pub target: Option<PathBuf>,
    /// Whether the target exists on the file system.
    pub valid: bool,
    /// Classification message for invalid shortcuts.
    pub error: Option<String>,
}

/// Aggregated outcome of one verification pass.
///
/// Broken records are carried here rather than in verifier state; callers
/// thread them into [`crate::repair::RepairEngine::repair_all_shortcuts`]
/// explicitly.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub valid_count: usize,
    pub broken_count: usize,
    /// One record per discovered shortcut, in scan order.
    pub records: Vec<ShortcutRecord>,
}

impl VerificationReport {
    /// The records classified as broken, in scan order.
    pub fn broken_records(&self) -> impl Iterator<Item = &ShortcutRecord> {
        self.records.iter().filter(|r| !r.valid)
    }

    pub fn has_broken(&self) -> bool {
        self.broken_count > 0
    }
}

/// Classifies shortcuts by resolving their stored targets.
pub struct Verifier<S = PlatformStore> {
    scanner: Scanner,
    store: S,
}

impl Verifier {
    pub fn new(paths: StartMenuPaths) -> Self {
        Self::with_store(paths, PlatformStore::default())
    }
}

impl<S: ShortcutStore> Verifier<S> {
    pub fn with_store(paths: StartMenuPaths, store: S) -> Self {
        Self {
            scanner: Scanner::new(paths),
            store,
        }
    }

    /// Verify a single shortcut.
    ///
    /// Pure query: repeated calls for the same path return the same record
    /// and accumulate nothing.
    pub fn verify_shortcut(&self, path: &Path) -> ShortcutRecord {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(target) = self.store.read_target(path) else {
            return ShortcutRecord {
                name,
                path: path.to_path_buf(),
                target: None,
                valid: false,
                error: Some("Unable to read shortcut target".to_string()),
            };
        };

        if target.exists() {
            ShortcutRecord {
                name,
                path: path.to_path_buf(),
                target: Some(target),
                valid: true,
                error: None,
            }
        } else {
            ShortcutRecord {
                name,
                path: path.to_path_buf(),
                target: Some(target),
                valid: false,
                error: Some("Target file does not exist".to_string()),
            }
        }
    }

    /// Verify every shortcut under the selected roots.
    ///
    /// Never fails outright: an inaccessible directory degrades to fewer
    /// shortcuts found, not an error.
    pub fn verify_all_shortcuts(
        &self,
        location: Location,
        subfolder: Option<&str>,
    ) -> VerificationReport {
        let mut report = VerificationReport {
            valid_count: 0,
            broken_count: 0,
            records: Vec::new(),
        };

        for shortcut in self.scanner.find_shortcuts(location, subfolder) {
            let record = self.verify_shortcut(&shortcut);
            if record.valid {
                report.valid_count += 1;
            } else {
                report.broken_count += 1;
            }
            report.records.push(record);
        }

        info!(
            "Verified {} shortcut(s): {} valid, {} broken",
            report.records.len(),
            report.valid_count,
            report.broken_count
        );
        report
    }
}
