//! Platform abstraction layer for cross-platform compatibility.
//!
//! This module centralizes all platform-specific code. All `#[cfg]` blocks
//! for OS-specific behavior should live in this module rather than scattered
//! throughout the codebase.
//!
//! # Architecture
//!
//! - `paths` - Start Menu root resolution and shortcut file extensions
//! - `privilege` - Elevated/superuser detection
//!
//! # Supported Platforms
//!
//! - **Windows**: native Start Menu roots and `.lnk` shortcuts
//! - **Linux/macOS**: freedesktop-style application directories and
//!   `.desktop` entries, matching the simulation roots of the original tool

pub mod paths;
pub mod privilege;

// Re-export commonly used items
pub use paths::{
    common_programs_dir, shortcut_extension, user_programs_dir, Location, RootLocation,
    StartMenuPaths,
};
pub use privilege::is_privileged;

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}
