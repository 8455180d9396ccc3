//! Elevated-privilege detection.
//!
//! Writing to the all-users Start Menu root requires elevation on Windows.
//! On non-elevating platforms the equivalent check is "is the effective user
//! root".

/// Check if the current process can write to system-wide shortcut locations.
///
/// # Platform Behavior
/// - **Windows**: `IsUserAnAdmin` from shell32
/// - **Linux/macOS**: effective UID is root
pub fn is_privileged() -> bool {
    #[cfg(windows)]
    {
        is_user_an_admin()
    }

    #[cfg(unix)]
    {
        nix::unistd::geteuid().is_root()
    }

    #[cfg(not(any(windows, unix)))]
    {
        false
    }
}

#[cfg(windows)]
#[allow(unsafe_code)]
fn is_user_an_admin() -> bool {
    // SAFETY: IsUserAnAdmin takes no arguments and only inspects the token
    // of the calling process.
    unsafe { windows_sys::Win32::UI::Shell::IsUserAnAdmin() != 0 }
}
