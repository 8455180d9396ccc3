//! Start Menu root resolution.
//!
//! Each root is resolved by asking the platform for the canonical
//! special-folder path first, then falling back to a deterministic default
//! derived from environment/user-profile conventions.

use crate::error::{MenumendError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the two well-known shortcut roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootLocation {
    /// The current user's Start Menu Programs folder.
    User,
    /// The all-users Start Menu Programs folder. Writing here requires
    /// elevated privileges.
    Common,
}

impl RootLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootLocation::User => "user",
            RootLocation::Common => "common",
        }
    }
}

impl fmt::Display for RootLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scan scope: one root or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    User,
    Common,
    Both,
}

impl Location {
    /// The concrete roots this scope selects, in a fixed order.
    pub fn roots(&self) -> &'static [RootLocation] {
        match self {
            Location::User => &[RootLocation::User],
            Location::Common => &[RootLocation::Common],
            Location::Both => &[RootLocation::User, RootLocation::Common],
        }
    }
}

/// Get the current user's Start Menu Programs directory.
///
/// # Platform Behavior
/// - **Windows**: `%APPDATA%\Microsoft\Windows\Start Menu\Programs`, resolved
///   through the known-folder query with an `APPDATA` environment fallback
/// - **Linux/macOS**: `~/.local/share/applications`
pub fn user_programs_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = dirs::data_dir()
            .or_else(|| std::env::var_os("APPDATA").map(PathBuf::from))
            .ok_or_else(|| MenumendError::Config {
                message: "Could not determine app data directory".to_string(),
            })?;
        Ok(appdata
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs"))
    }

    #[cfg(not(windows))]
    {
        let data_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| MenumendError::Config {
                message: "Could not determine home directory".to_string(),
            })?;
        Ok(data_dir.join("applications"))
    }
}

/// Get the all-users Start Menu Programs directory.
///
/// # Platform Behavior
/// - **Windows**: `%ProgramData%\Microsoft\Windows\Start Menu\Programs`
/// - **Linux/macOS**: `/usr/local/share/applications`
pub fn common_programs_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let program_data = std::env::var_os("ProgramData")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"));
        Ok(program_data
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs"))
    }

    #[cfg(not(windows))]
    {
        Ok(PathBuf::from("/usr/local/share/applications"))
    }
}

/// Get the file extension for shortcuts on the current platform.
///
/// # Platform Behavior
/// - **Windows**: `lnk` (Windows shortcut files)
/// - **Linux/macOS**: `desktop` (freedesktop .desktop files)
pub fn shortcut_extension() -> &'static str {
    #[cfg(windows)]
    {
        "lnk"
    }
    #[cfg(not(windows))]
    {
        "desktop"
    }
}

/// The two shortcut roots plus the privilege flag, resolved once.
///
/// Resolution happens at construction; the returned value is a pure query
/// object. Directory existence is not guaranteed — callers create
/// directories before writing.
#[derive(Debug, Clone)]
pub struct StartMenuPaths {
    user: PathBuf,
    common: PathBuf,
    privileged: bool,
}

impl StartMenuPaths {
    /// Resolve both roots and the privilege state for the current process.
    pub fn resolve() -> Result<Self> {
        Ok(Self {
            user: user_programs_dir()?,
            common: common_programs_dir()?,
            privileged: super::privilege::is_privileged(),
        })
    }

    /// Build from explicit roots. Used by embedders and tests that redirect
    /// the scan to their own directory trees.
    pub fn with_roots(
        user: impl Into<PathBuf>,
        common: impl Into<PathBuf>,
        privileged: bool,
    ) -> Self {
        Self {
            user: user.into(),
            common: common.into(),
            privileged,
        }
    }

    pub fn user_root(&self) -> &Path {
        &self.user
    }

    pub fn common_root(&self) -> &Path {
        &self.common
    }

    /// Whether the current process can write to the common root.
    pub fn is_privileged(&self) -> bool {
        self.privileged
    }

    pub fn root(&self, location: RootLocation) -> &Path {
        match location {
            RootLocation::User => &self.user,
            RootLocation::Common => &self.common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_programs_dir() {
        let dir = user_programs_dir().unwrap();
        assert!(dir.is_absolute());

        #[cfg(windows)]
        assert!(dir.to_string_lossy().contains("Start Menu"));

        #[cfg(not(windows))]
        assert!(dir.ends_with("applications"));
    }

    #[test]
    fn test_shortcut_extension() {
        let ext = shortcut_extension();

        #[cfg(windows)]
        assert_eq!(ext, "lnk");

        #[cfg(not(windows))]
        assert_eq!(ext, "desktop");
    }

    #[test]
    fn test_location_roots() {
        assert_eq!(Location::User.roots(), &[RootLocation::User]);
        assert_eq!(
            Location::Both.roots(),
            &[RootLocation::User, RootLocation::Common]
        );
    }

    #[test]
    fn test_with_roots() {
        let paths = StartMenuPaths::with_roots("/tmp/user", "/tmp/common", true);
        assert_eq!(paths.user_root(), Path::new("/tmp/user"));
        assert_eq!(paths.root(RootLocation::Common), Path::new("/tmp/common"));
        assert!(paths.is_privileged());
    }
}
