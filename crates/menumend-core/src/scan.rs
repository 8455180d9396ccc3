//! Shortcut enumeration across the Start Menu roots.

use crate::platform::{self, Location, RootLocation, StartMenuPaths};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walks the shortcut roots and enumerates shortcut files.
pub struct Scanner {
    paths: StartMenuPaths,
}

impl Scanner {
    pub fn new(paths: StartMenuPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StartMenuPaths {
        &self.paths
    }

    /// Find all shortcuts under the selected roots.
    ///
    /// The common root is dropped with a warning when the process lacks the
    /// privilege to access it; missing roots are skipped silently. Paths come
    /// back in the natural depth-first traversal order of the file system,
    /// which is not guaranteed stable across platforms.
    ///
    /// Never fails: when no root is accessible the result is empty.
    pub fn find_shortcuts(&self, location: Location, subfolder: Option<&str>) -> Vec<PathBuf> {
        let mut shortcuts = Vec::new();

        for (_, root) in self.candidate_roots(location) {
            let search_root = match subfolder {
                Some(sub) => root.join(sub),
                None => root,
            };
            shortcuts.extend(find_in_dir(&search_root));
        }

        debug!("Found {} shortcut(s)", shortcuts.len());
        shortcuts
    }

    /// The roots selected by `location` that this process may access.
    pub(crate) fn candidate_roots(&self, location: Location) -> Vec<(RootLocation, PathBuf)> {
        let mut roots = Vec::new();

        for &root in location.roots() {
            if root == RootLocation::Common && !self.paths.is_privileged() {
                warn!("Administrator privileges required to access All Users shortcuts");
                continue;
            }
            roots.push((root, self.paths.root(root).to_path_buf()));
        }

        roots
    }
}

/// Walk one directory tree for shortcut files, depth-first.
///
/// A missing directory yields nothing; unreadable entries are skipped.
pub(crate) fn find_in_dir(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_shortcut_file(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Whether a path carries the platform shortcut extension.
pub(crate) fn is_shortcut_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            ext.to_string_lossy()
                .eq_ignore_ascii_case(platform::shortcut_extension())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn shortcut_name(stem: &str) -> String {
        format!("{}.{}", stem, platform::shortcut_extension())
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "[Desktop Entry]\nExec=/bin/true\n").unwrap();
    }

    #[test]
    fn test_find_shortcuts_recurses_into_subfolders() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user");
        let common = temp_dir.path().join("common");

        touch(&user.join(shortcut_name("top")));
        touch(&user.join("Tools").join(shortcut_name("nested")));
        touch(&user.join("notes.txt"));

        let scanner = Scanner::new(StartMenuPaths::with_roots(&user, &common, false));
        let found = scanner.find_shortcuts(Location::User, None);

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| is_shortcut_file(p)));
    }

    #[test]
    fn test_find_shortcuts_with_subfolder() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user");
        let common = temp_dir.path().join("common");

        touch(&user.join(shortcut_name("outside")));
        touch(&user.join("Games").join(shortcut_name("inside")));

        let scanner = Scanner::new(StartMenuPaths::with_roots(&user, &common, false));
        let found = scanner.find_shortcuts(Location::User, Some("Games"));

        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with(shortcut_name("inside")));
    }

    #[test]
    fn test_common_root_dropped_without_privilege() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user");
        let common = temp_dir.path().join("common");

        touch(&common.join(shortcut_name("system")));

        let unprivileged = Scanner::new(StartMenuPaths::with_roots(&user, &common, false));
        assert!(unprivileged.find_shortcuts(Location::Both, None).is_empty());

        let privileged = Scanner::new(StartMenuPaths::with_roots(&user, &common, true));
        assert_eq!(privileged.find_shortcuts(Location::Both, None).len(), 1);
    }

    #[test]
    fn test_missing_roots_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = Scanner::new(StartMenuPaths::with_roots(
            temp_dir.path().join("nope"),
            temp_dir.path().join("also-nope"),
            true,
        ));

        assert!(scanner.find_shortcuts(Location::Both, None).is_empty());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let ext = platform::shortcut_extension().to_uppercase();
        let path = PathBuf::from(format!("App.{}", ext));
        assert!(is_shortcut_file(&path));
        assert!(!is_shortcut_file(Path::new("App.txt")));
    }
}
