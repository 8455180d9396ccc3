//! Menumend Core - Headless library for Start Menu shortcut management.
//!
//! This crate provides the core functionality for creating, verifying,
//! repairing, and backing up Start Menu shortcuts. It can be used
//! programmatically without any UI layer.
//!
//! Every operation is synchronous and runs to completion on the caller's
//! thread; batch operations report per-item outcomes and never abort the
//! batch on a single failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use menumend_core::{Location, RepairEngine, StartMenuPaths, Verifier};
//!
//! fn main() -> menumend_core::Result<()> {
//!     let paths = StartMenuPaths::resolve()?;
//!
//!     // Verify everything under both roots.
//!     let verifier = Verifier::new(paths.clone());
//!     let report = verifier.verify_all_shortcuts(Location::Both, None);
//!     println!("{} valid, {} broken", report.valid_count, report.broken_count);
//!
//!     // Heuristically repair whatever came back broken.
//!     if report.has_broken() {
//!         let engine = RepairEngine::new();
//!         let repairs = engine.repair_all_shortcuts(report.broken_records());
//!         println!("{} fixed", repairs.success_count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backup;
pub mod config;
pub mod create;
pub mod error;
pub mod exe;
pub mod platform;
pub mod repair;
pub mod scan;
pub mod store;
pub mod verify;

// Re-export commonly used types
pub use backup::{BackupManager, BackupSummary, RestoreReport, RestoreResult};
pub use create::ShortcutCreator;
pub use error::{MenumendError, Result};
pub use exe::{get_exe_info, is_valid_exe, ExeInfo};
pub use platform::{Location, RootLocation, StartMenuPaths};
pub use repair::{RepairEngine, RepairOutcome, RepairReport, RepairResult, RepairRule};
pub use scan::Scanner;
pub use store::{PlatformStore, ShortcutStore};
pub use verify::{ShortcutRecord, VerificationReport, Verifier};
