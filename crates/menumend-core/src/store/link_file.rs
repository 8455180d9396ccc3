//! Windows shell link (.lnk file) shortcut store.
//!
//! Reads targets from the link-info block of an existing shell link and
//! writes links carrying the target, its directory as the working directory,
//! and the target's first icon, matching what the native shell produces.

use super::ShortcutStore;
use crate::error::{MenumendError, Result};
use lnk::ShellLink;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Shortcut store backed by Windows `.lnk` shell links.
#[derive(Debug, Clone, Copy, Default)]
pub struct LnkStore;

impl LnkStore {
    pub fn new() -> Self {
        Self
    }
}

impl ShortcutStore for LnkStore {
    fn read_target(&self, shortcut: &Path) -> Option<PathBuf> {
        if !shortcut.exists() {
            return None;
        }

        let link = match ShellLink::open(shortcut) {
            Ok(link) => link,
            Err(e) => {
                warn!("Error reading shortcut {}: {:?}", shortcut.display(), e);
                return None;
            }
        };

        // Absolute target from the link-info block when present.
        if let Some(info) = link.link_info() {
            if let Some(base) = info.local_base_path() {
                return Some(PathBuf::from(base));
            }
        }

        // Otherwise resolve the stored relative path against the shortcut's
        // own directory.
        if let Some(relative) = link.relative_path() {
            let base = shortcut.parent().unwrap_or_else(|| Path::new(""));
            return Some(base.join(relative));
        }

        warn!(
            "Shortcut {} has no resolvable target field",
            shortcut.display()
        );
        None
    }

    fn write_target(&self, shortcut: &Path, target: &Path) -> Result<()> {
        let mut link = ShellLink::new_simple(target)
            .map_err(|e| MenumendError::io_op("build shell link", shortcut, e))?;

        link.set_name(
            shortcut
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned()),
        );
        link.set_working_dir(target.parent().map(|p| p.display().to_string()));
        link.set_icon_location(Some(format!("{},0", target.display())));

        link.save(shortcut).map_err(|e| MenumendError::Io {
            message: format!("write shell link: {:?}", e),
            path: Some(shortcut.to_path_buf()),
            source: None,
        })?;

        debug!(
            "Wrote shortcut {} -> {}",
            shortcut.display(),
            target.display()
        );
        Ok(())
    }
}
