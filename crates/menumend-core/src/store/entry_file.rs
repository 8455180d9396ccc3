//! Desktop entry (.desktop file) shortcut store.
//!
//! Implements the XDG Desktop Entry Specification far enough to treat the
//! `Exec=` field as the shortcut's stored target. Other fields are preserved
//! verbatim when a target is rewritten in place.

use super::ShortcutStore;
use crate::error::{MenumendError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EXEC_KEY: &str = "Exec=";

/// Shortcut store backed by freedesktop `.desktop` entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryStore;

impl EntryStore {
    pub fn new() -> Self {
        Self
    }

    /// Extract the target path from one `Exec=` line value.
    ///
    /// Surrounding quotes are stripped; an empty value yields `None`.
    fn parse_exec_value(value: &str) -> Option<PathBuf> {
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        if value.is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        }
    }

    /// Render a fresh minimal entry for `target`.
    fn render_new_entry(shortcut: &Path, target: &Path) -> String {
        let name = shortcut
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut content = String::new();
        content.push_str("[Desktop Entry]\n");
        content.push_str(&format!("Name={}\n", name));
        content.push_str(&format!("{}{}\n", EXEC_KEY, target.display()));
        content.push_str("Terminal=false\n");
        content.push_str("Type=Application\n");
        content
    }
}

impl ShortcutStore for EntryStore {
    fn read_target(&self, shortcut: &Path) -> Option<PathBuf> {
        if !shortcut.exists() {
            return None;
        }

        let content = match fs::read_to_string(shortcut) {
            Ok(content) => content,
            Err(e) => {
                warn!("Error reading shortcut {}: {}", shortcut.display(), e);
                return None;
            }
        };

        let target = content
            .lines()
            .find_map(|line| line.strip_prefix(EXEC_KEY))
            .and_then(Self::parse_exec_value);

        if target.is_none() {
            warn!(
                "Shortcut {} has no resolvable target field",
                shortcut.display()
            );
        }
        target
    }

    fn write_target(&self, shortcut: &Path, target: &Path) -> Result<()> {
        let content = if shortcut.exists() {
            // Rewrite the target field in place, keeping every other line.
            let existing = fs::read_to_string(shortcut)
                .map_err(|e| MenumendError::io_op("read shortcut entry", shortcut, e))?;

            let mut replaced = false;
            let mut lines: Vec<String> = existing
                .lines()
                .map(|line| {
                    if line.starts_with(EXEC_KEY) {
                        replaced = true;
                        format!("{}{}", EXEC_KEY, target.display())
                    } else {
                        line.to_string()
                    }
                })
                .collect();

            if !replaced {
                lines.push(format!("{}{}", EXEC_KEY, target.display()));
            }

            lines.join("\n") + "\n"
        } else {
            Self::render_new_entry(shortcut, target)
        };

        let mut file = fs::File::create(shortcut)
            .map_err(|e| MenumendError::io_op("create shortcut entry", shortcut, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| MenumendError::io_op("write shortcut entry", shortcut, e))?;

        debug!(
            "Wrote shortcut {} -> {}",
            shortcut.display(),
            target.display()
        );
        Ok(())
    }
}
