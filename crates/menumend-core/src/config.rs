//! Centralized configuration for Menumend.
//!
//! Constant namespaces for file-type recognition and backup naming.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Menumend";
}

/// Shortcut and executable recognition.
pub struct ShortcutConfig;

impl ShortcutConfig {
    /// Extensions accepted as launchable targets by the creation flow.
    pub const EXE_EXTENSIONS: &'static [&'static str] = &["exe", "bat", "cmd", "msi"];

    /// First two bytes of a valid PE executable.
    pub const PE_SIGNATURE: &'static [u8; 2] = b"MZ";
}

/// Backup directory naming.
pub struct BackupConfig;

impl BackupConfig {
    pub const DIR_PREFIX: &'static str = "ShortcutBackup";

    /// Second-granularity stamp; two backups within the same second share a
    /// directory and merge.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y%m%d_%H%M%S";
}
