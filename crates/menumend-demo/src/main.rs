//! Menumend console demo - standalone verifier and repair driver.
//!
//! Demonstration driver, not a configurable tool: it takes no flags, runs
//! scan -> verify -> repair -> backup in order against both Start Menu
//! roots, and always exits with status 0.

use menumend_core::{
    BackupManager, Location, RepairEngine, Scanner, StartMenuPaths, Verifier,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Set up logging; diagnostics go through tracing, user-facing output
    // through stdout.
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    println!("Start Menu Shortcut Verifier and Repair Tool");
    println!("===========================================");

    let paths = match StartMenuPaths::resolve() {
        Ok(paths) => paths,
        Err(e) => {
            println!("Unable to resolve Start Menu locations: {}", e);
            return;
        }
    };
    info!(
        "User root: {}, common root: {}, privileged: {}",
        paths.user_root().display(),
        paths.common_root().display(),
        paths.is_privileged()
    );

    println!("\nFinding shortcuts...");
    let scanner = Scanner::new(paths.clone());
    let shortcuts = scanner.find_shortcuts(Location::Both, None);
    println!("Found {} shortcuts", shortcuts.len());

    println!("\nVerifying shortcuts...");
    let verifier = Verifier::new(paths.clone());
    let report = verifier.verify_all_shortcuts(Location::Both, None);
    println!(
        "Results: {} valid, {} broken",
        report.valid_count, report.broken_count
    );

    if report.has_broken() {
        println!("\nBroken shortcuts:");
        for record in report.broken_records() {
            let target = record
                .target
                .as_ref()
                .map(|t| t.display().to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            let error = record.error.as_deref().unwrap_or("invalid");
            println!("- {} -> {} ({})", record.name, target, error);
        }

        println!("\nAttempting to repair broken shortcuts...");
        let engine = RepairEngine::new();
        let repairs = engine.repair_all_shortcuts(report.broken_records());
        println!(
            "Repair results: {} fixed, {} failed",
            repairs.success_count, repairs.failed_count
        );

        if repairs.success_count > 0 {
            println!("\nRepaired shortcuts:");
            for result in repairs.results.iter().filter(|r| r.success) {
                println!("- {} - {}", result.name, result.message);
            }
        }

        if repairs.failed_count > 0 {
            println!("\nShortcuts that could not be repaired:");
            for result in repairs.results.iter().filter(|r| !r.success) {
                println!("- {} - {}", result.name, result.message);
            }
        }
    }

    println!("\nCreating backup of all shortcuts...");
    let manager = BackupManager::new(paths);
    match manager.backup_shortcuts(None) {
        Ok(summary) => {
            println!(
                "Backup created successfully at {}",
                summary.backup_dir.display()
            );
            println!("Backed up {} shortcuts", summary.count);
        }
        Err(e) => println!("Backup failed: {}", e),
    }
}
