//! Shortcut store adapter.
//!
//! Abstracts reading and writing a shortcut's persisted target path over the
//! native shortcut format. One concrete variant exists per platform and the
//! `PlatformStore` alias selects it, so no platform branches leak into the
//! verification, repair, or creation code.

use crate::error::Result;
use std::path::{Path, PathBuf};

#[cfg(not(windows))]
mod entry_file;
#[cfg(windows)]
mod link_file;

#[cfg(not(windows))]
pub use entry_file::EntryStore;
#[cfg(windows)]
pub use link_file::LnkStore;

/// The shortcut store for the current platform.
///
/// - **Windows**: [`LnkStore`] (`.lnk` shell-link files)
/// - **Linux/macOS**: [`EntryStore`] (freedesktop `.desktop` entries)
#[cfg(windows)]
pub type PlatformStore = LnkStore;
#[cfg(not(windows))]
pub type PlatformStore = EntryStore;

/// Read/write access to a shortcut's stored target path.
pub trait ShortcutStore {
    /// Resolve the target path stored in a shortcut file.
    ///
    /// Returns `None` for a missing shortcut, and also for a malformed or
    /// unreadable one — those are logged as diagnostics, never propagated.
    fn read_target(&self, shortcut: &Path) -> Option<PathBuf>;

    /// Update the stored target path in place.
    ///
    /// The directory containing the shortcut must already exist. Writing to
    /// a path with no existing shortcut creates a fresh minimal entry.
    fn write_target(&self, shortcut: &Path, target: &Path) -> Result<()>;
}
