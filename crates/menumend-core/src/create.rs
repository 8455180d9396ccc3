//! Shortcut creation.
//!
//! Places a new shortcut under the user or all-users root, optionally inside
//! a subfolder, after validating the target executable.

use crate::error::{MenumendError, Result};
use crate::exe;
use crate::platform::{self, StartMenuPaths};
use crate::store::{PlatformStore, ShortcutStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Creates Start Menu shortcuts pointing at executables.
pub struct ShortcutCreator<S = PlatformStore> {
    paths: StartMenuPaths,
    store: S,
}

impl ShortcutCreator {
    pub fn new(paths: StartMenuPaths) -> Self {
        Self::with_store(paths, PlatformStore::default())
    }
}

impl<S: ShortcutStore> ShortcutCreator<S> {
    pub fn with_store(paths: StartMenuPaths, store: S) -> Self {
        Self { paths, store }
    }

    /// Create a shortcut to `exe_path` named `shortcut_name`.
    ///
    /// The platform shortcut extension is appended when missing. The
    /// destination folder (including an optional `subfolder`) is created as
    /// needed. Returns the path of the created shortcut.
    pub fn create_shortcut(
        &self,
        exe_path: &Path,
        shortcut_name: &str,
        for_all_users: bool,
        subfolder: Option<&str>,
    ) -> Result<PathBuf> {
        if for_all_users && !self.paths.is_privileged() {
            return Err(MenumendError::PrivilegeRequired {
                action: "create shortcuts for all users".to_string(),
            });
        }

        let shortcut_name = shortcut_name.trim();
        if shortcut_name.is_empty() {
            return Err(MenumendError::Validation {
                field: "shortcut_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if !exe_path.exists() {
            return Err(MenumendError::FileNotFound(exe_path.to_path_buf()));
        }
        if !exe::is_valid_exe(exe_path) {
            return Err(MenumendError::InvalidExecutable(exe_path.to_path_buf()));
        }

        let root = if for_all_users {
            self.paths.common_root()
        } else {
            self.paths.user_root()
        };
        let target_dir = match subfolder {
            Some(sub) => root.join(sub),
            None => root.to_path_buf(),
        };
        fs::create_dir_all(&target_dir)
            .map_err(|e| MenumendError::io_op("create Start Menu folder", &target_dir, e))?;

        let extension = platform::shortcut_extension();
        let suffix = format!(".{}", extension);
        let file_name = if shortcut_name.to_lowercase().ends_with(&suffix) {
            shortcut_name.to_string()
        } else {
            format!("{}{}", shortcut_name, suffix)
        };

        let shortcut_path = target_dir.join(file_name);
        self.store.write_target(&shortcut_path, exe_path)?;

        info!(
            "Created shortcut {} -> {}",
            shortcut_path.display(),
            exe_path.display()
        );
        Ok(shortcut_path)
    }
}
