//! Heuristic repair of broken shortcuts.
//!
//! Repair is path-heuristic only: an ordered list of path-segment
//! substitutions is tried against the unresolved target and the first
//! candidate confirmed on the file system wins. There is no content-based
//! matching of moved executables.

use crate::store::{PlatformStore, ShortcutStore};
use crate::verify::ShortcutRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One path-segment substitution tried during heuristic repair.
#[derive(Debug, Clone)]
pub struct RepairRule {
    /// Segment to look for in the unresolved target path.
    pub find: String,
    /// Replacement segment.
    pub replace: String,
}

impl RepairRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Outcome of repairing one shortcut.
#[derive(Debug, Clone, Serialize)]
pub struct RepairOutcome {
    pub success: bool,
    pub message: String,
}

impl RepairOutcome {
    fn success(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Per-shortcut entry of a batch repair.
#[derive(Debug, Clone, Serialize)]
pub struct RepairResult {
    pub name: String,
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
}

/// Aggregated outcome of a batch repair, in iteration order.
#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub results: Vec<RepairResult>,
}

/// Rewrites broken shortcuts to working targets.
pub struct RepairEngine<S = PlatformStore> {
    store: S,
    rules: Vec<RepairRule>,
}

impl RepairEngine {
    pub fn new() -> Self {
        Self::with_store(PlatformStore::default())
    }
}

impl Default for RepairEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShortcutStore> RepairEngine<S> {
    /// Create an engine with the default installation-root substitutions.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            rules: vec![
                RepairRule::new("Program Files (x86)", "Program Files"),
                RepairRule::new("Program Files", "Program Files (x86)"),
            ],
        }
    }

    /// Append a substitution rule. Rules are tried in insertion order.
    pub fn with_rule(mut self, rule: RepairRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[RepairRule] {
        &self.rules
    }

    /// Attempt to repair one shortcut.
    ///
    /// With an explicit `new_target` the shortcut is rewritten directly and
    /// no existence check is performed — the caller is trusted. Without one,
    /// the current target is accepted if it now exists; otherwise the
    /// substitution rules are tried in order and the first candidate that
    /// exists is written back.
    ///
    /// Failures, including unexpected I/O errors, come back as structured
    /// outcomes; this method never returns an error.
    pub fn repair_shortcut(&self, shortcut: &Path, new_target: Option<&Path>) -> RepairOutcome {
        if !shortcut.exists() {
            return RepairOutcome::failure("Shortcut file not found");
        }

        if let Some(new_target) = new_target {
            return self.rewrite(shortcut, new_target);
        }

        let Some(current) = self.store.read_target(shortcut) else {
            return RepairOutcome::failure("Unable to determine target path");
        };

        if current.exists() {
            // Target is back (e.g. a drive was remounted); re-save as-is.
            return self.rewrite(shortcut, &current);
        }

        for candidate in self.candidates(&current) {
            debug!(
                "Trying repair candidate {} for {}",
                candidate.display(),
                shortcut.display()
            );
            if candidate.exists() {
                return self.rewrite(shortcut, &candidate);
            }
        }

        RepairOutcome::failure("Unable to locate the target application")
    }

    /// Repair every broken record from a prior verification pass.
    ///
    /// Heuristic-only: each shortcut is repaired without an explicit new
    /// target. Results aggregate in iteration order.
    pub fn repair_all_shortcuts<'a, I>(&self, broken: I) -> RepairReport
    where
        I: IntoIterator<Item = &'a ShortcutRecord>,
    {
        let mut report = RepairReport {
            success_count: 0,
            failed_count: 0,
            results: Vec::new(),
        };

        for record in broken {
            let outcome = self.repair_shortcut(&record.path, None);
            if outcome.success {
                report.success_count += 1;
            } else {
                report.failed_count += 1;
            }
            report.results.push(RepairResult {
                name: record.name.clone(),
                path: record.path.clone(),
                success: outcome.success,
                message: outcome.message,
            });
        }

        info!(
            "Repair pass: {} fixed, {} failed",
            report.success_count, report.failed_count
        );
        report
    }

    fn rewrite(&self, shortcut: &Path, target: &Path) -> RepairOutcome {
        match self.store.write_target(shortcut, target) {
            Ok(()) => RepairOutcome::success(format!(
                "Shortcut repaired, now points to {}",
                target.display()
            )),
            Err(e) => RepairOutcome::failure(format!("Error repairing shortcut: {}", e)),
        }
    }

    /// Substitution candidates for an unresolved target, in rule order.
    fn candidates(&self, target: &Path) -> Vec<PathBuf> {
        let target_str = target.to_string_lossy();
        self.rules
            .iter()
            .filter_map(|rule| {
                let candidate = target_str.replace(&rule.find, &rule.replace);
                (candidate != target_str).then(|| PathBuf::from(candidate))
            })
            .collect()
    }
}
