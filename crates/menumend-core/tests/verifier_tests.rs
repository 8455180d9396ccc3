//! Integration tests for the shortcut verification, repair, and backup
//! workflow against a simulated pair of Start Menu roots.

use menumend_core::{
    BackupManager, Location, PlatformStore, RepairEngine, RootLocation, Scanner, ShortcutStore,
    StartMenuPaths, Verifier,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Extension shortcuts carry on the platform running the tests.
fn ext() -> &'static str {
    menumend_core::platform::shortcut_extension()
}

/// Create user/common roots inside a fresh temp dir.
fn create_roots(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let user = temp_dir.path().join("user");
    let common = temp_dir.path().join("common");
    fs::create_dir_all(&user).unwrap();
    fs::create_dir_all(&common).unwrap();
    (user, common)
}

/// Write a shortcut pointing at `target` through the platform store.
fn write_shortcut(dir: &Path, stem: &str, target: &Path) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(format!("{}.{}", stem, ext()));
    PlatformStore::default().write_target(&path, target).unwrap();
    path
}

/// Create an executable target file.
fn create_target(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, b"MZ\x90\x00").unwrap();
    path
}

#[test]
fn verify_all_reports_three_valid_two_broken() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);

    let real = create_target(temp_dir.path(), "real.exe");
    write_shortcut(&user, "One", &real);
    write_shortcut(&user, "Two", &real);
    write_shortcut(&user.join("Office"), "Three", &real);
    write_shortcut(&user, "BrokenA", &temp_dir.path().join("gone.exe"));
    write_shortcut(&user, "BrokenB", &temp_dir.path().join("also-gone.exe"));

    let verifier = Verifier::new(StartMenuPaths::with_roots(&user, &common, false));
    let report = verifier.verify_all_shortcuts(Location::Both, None);

    assert_eq!(report.valid_count, 3);
    assert_eq!(report.broken_count, 2);
    assert_eq!(report.records.len(), 5);
    assert!(report
        .broken_records()
        .all(|r| r.error.as_deref() == Some("Target file does not exist")));
}

#[test]
fn find_shortcuts_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);

    let target = create_target(temp_dir.path(), "app.exe");
    write_shortcut(&user, "A", &target);
    write_shortcut(&user.join("Sub"), "B", &target);
    write_shortcut(&common, "C", &target);

    let scanner = Scanner::new(StartMenuPaths::with_roots(&user, &common, true));
    let first: BTreeSet<_> = scanner.find_shortcuts(Location::Both, None).into_iter().collect();
    let second: BTreeSet<_> = scanner.find_shortcuts(Location::Both, None).into_iter().collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn common_root_without_privilege_degrades_to_user_only() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);

    let target = create_target(temp_dir.path(), "app.exe");
    write_shortcut(&user, "Mine", &target);
    write_shortcut(&common, "Everyones", &target);

    let scanner = Scanner::new(StartMenuPaths::with_roots(&user, &common, false));
    let found = scanner.find_shortcuts(Location::Both, None);

    assert_eq!(found.len(), 1);
    assert!(found[0].starts_with(&user));
}

#[test]
fn broken_shortcut_repairs_only_when_substituted_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);
    let paths = StartMenuPaths::with_roots(&user, &common, false);

    // The stale target lives under the 64-bit convention; the real file is
    // under the 32-bit one.
    let stale = temp_dir.path().join("Program Files").join("App").join("app.exe");
    let shortcut = write_shortcut(&user, "App", &stale);

    let verifier = Verifier::new(paths);
    let record = verifier.verify_shortcut(&shortcut);
    assert!(!record.valid);
    assert_eq!(record.target, Some(stale.clone()));
    assert_eq!(record.error.as_deref(), Some("Target file does not exist"));

    // No substituted path exists yet: repair must fail.
    let engine = RepairEngine::new();
    let outcome = engine.repair_shortcut(&shortcut, None);
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Unable to locate the target application");

    // Materialize the 32-bit path and repair again.
    let moved = create_target(
        &temp_dir.path().join("Program Files (x86)").join("App"),
        "app.exe",
    );
    let outcome = engine.repair_shortcut(&shortcut, None);
    assert!(outcome.success);
    assert_eq!(PlatformStore::default().read_target(&shortcut), Some(moved));
}

#[test]
fn explicit_new_target_always_repairs() {
    let temp_dir = TempDir::new().unwrap();
    let (user, _common) = create_roots(&temp_dir);

    let shortcut = write_shortcut(&user, "Thing", &temp_dir.path().join("old.exe"));
    let new_target = temp_dir.path().join("Apps").join("thing.exe");

    let engine = RepairEngine::new();
    let outcome = engine.repair_shortcut(&shortcut, Some(&new_target));

    assert!(outcome.success);
    assert_eq!(
        PlatformStore::default().read_target(&shortcut),
        Some(new_target)
    );
}

#[test]
fn verify_then_repair_all_fixes_what_it_can() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);
    let paths = StartMenuPaths::with_roots(&user, &common, false);

    let real = create_target(temp_dir.path(), "real.exe");
    write_shortcut(&user, "Fine", &real);

    create_target(
        &temp_dir.path().join("Program Files (x86)").join("Tool"),
        "tool.exe",
    );
    write_shortcut(
        &user,
        "Fixable",
        &temp_dir.path().join("Program Files").join("Tool").join("tool.exe"),
    );
    write_shortcut(&user, "Hopeless", &temp_dir.path().join("nowhere.exe"));

    let verifier = Verifier::new(paths.clone());
    let report = verifier.verify_all_shortcuts(Location::Both, None);
    assert_eq!(report.valid_count, 1);
    assert_eq!(report.broken_count, 2);

    let engine = RepairEngine::new();
    let repairs = engine.repair_all_shortcuts(report.broken_records());
    assert_eq!(repairs.success_count, 1);
    assert_eq!(repairs.failed_count, 1);

    // A second verification pass sees the repaired shortcut as valid.
    let after = verifier.verify_all_shortcuts(Location::Both, None);
    assert_eq!(after.valid_count, 2);
    assert_eq!(after.broken_count, 1);
}

#[test]
fn backup_and_restore_round_trip_preserves_content() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);
    let paths = StartMenuPaths::with_roots(&user, &common, false);

    let target = create_target(temp_dir.path(), "app.exe");
    let top = write_shortcut(&user, "Top", &target);
    let nested = write_shortcut(&user.join("Games").join("Classics"), "Deep", &target);

    let originals: Vec<(PathBuf, Vec<u8>)> = [&top, &nested]
        .iter()
        .map(|p| (p.to_path_buf(), fs::read(p).unwrap()))
        .collect();

    let manager = BackupManager::new(paths);
    let summary = manager
        .backup_shortcuts(Some(temp_dir.path().join("backup")))
        .unwrap();
    assert_eq!(summary.count, 2);

    // Destroy the user root entirely, then restore.
    fs::remove_dir_all(&user).unwrap();
    let report = manager.restore_shortcuts(&summary.backup_dir, RootLocation::User);
    assert_eq!(report.success_count, 2);
    assert_eq!(report.failed_count, 0);

    for (path, content) in originals {
        assert!(path.exists(), "missing after restore: {}", path.display());
        assert_eq!(fs::read(&path).unwrap(), content);
    }
}

#[test]
fn restore_to_common_requires_privilege() {
    let temp_dir = TempDir::new().unwrap();
    let (user, common) = create_roots(&temp_dir);

    let target = create_target(temp_dir.path(), "app.exe");
    write_shortcut(&user, "App", &target);

    let unprivileged = BackupManager::new(StartMenuPaths::with_roots(&user, &common, false));
    let summary = unprivileged
        .backup_shortcuts(Some(temp_dir.path().join("backup")))
        .unwrap();

    let denied = unprivileged.restore_shortcuts(&summary.backup_dir, RootLocation::Common);
    assert_eq!(denied.success_count, 0);
    assert_eq!(denied.results.len(), 1);
    assert!(!denied.results[0].success);

    let privileged = BackupManager::new(StartMenuPaths::with_roots(&user, &common, true));
    let allowed = privileged.restore_shortcuts(&summary.backup_dir, RootLocation::Common);
    assert_eq!(allowed.success_count, 1);
    assert!(common.join(format!("App.{}", ext())).exists());
}
