//! Integration Test: UI Dependency Prohibition
//!
//! **Policy**: cardwall-core is headless. It MUST NOT depend on or
//! reference ratatui, crossterm, or any other UI framework, so that it
//! can drive any surface (or none at all, in tests).
//!
//! The inverse also holds for the network seam: the surface crate never
//! issues HTTP itself - all fetching goes through cardwall-core's
//! `FeedSource`.

use std::fs;
use std::path::{Path, PathBuf};

/// UI crates the core must never mention.
const FORBIDDEN_IN_CORE: &[&str] = &["ratatui", "crossterm"];

/// HTTP client crates the surface must never mention directly.
const FORBIDDEN_IN_TUI: &[&str] = &["reqwest"];

fn workspace_root() -> PathBuf {
    // CARGO_MANIFEST_DIR is tests/architectural-enforcement.
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

#[test]
fn test_core_has_no_ui_dependencies() {
    let violations = find_violations(&workspace_root().join("core"), FORBIDDEN_IN_CORE);

    assert!(
        violations.is_empty(),
        "cardwall-core must stay headless, but references UI crates:\n  {}",
        violations.join("\n  ")
    );
}

#[test]
fn test_tui_does_not_bypass_the_feed_seam() {
    let violations = find_violations(&workspace_root().join("tui"), FORBIDDEN_IN_TUI);

    assert!(
        violations.is_empty(),
        "cardwall-tui must fetch through cardwall-core's FeedSource, \
         but references HTTP crates directly:\n  {}",
        violations.join("\n  ")
    );
}

/// Scan a crate's manifest and sources for forbidden crate names.
fn find_violations(crate_dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();

    check_manifest(&crate_dir.join("Cargo.toml"), forbidden, &mut violations);
    check_sources(&crate_dir.join("src"), forbidden, &mut violations);

    violations
}

fn check_manifest(path: &Path, forbidden: &[&str], violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (idx, line) in content.lines().enumerate() {
        let code = line.split('#').next().unwrap_or(line);
        for name in forbidden {
            if code.trim_start().starts_with(name) {
                violations.push(format!("{}:{}: {}", path.display(), idx + 1, line.trim()));
            }
        }
    }
}

fn check_sources(dir: &Path, forbidden: &[&str], violations: &mut Vec<String>) {
    if !dir.exists() {
        return;
    }

    for entry in walkdir::WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let content = match fs::read_to_string(entry.path()) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for (idx, line) in content.lines().enumerate() {
            // Skip comments; crate names in prose are fine.
            let code = line.split("//").next().unwrap_or(line);
            for name in forbidden {
                let ident = name.replace('-', "_");
                if code.contains(&format!("{ident}::")) || code.contains(&format!("use {ident}")) {
                    violations.push(format!(
                        "{}:{}: {}",
                        entry.path().display(),
                        idx + 1,
                        line.trim()
                    ));
                }
            }
        }
    }
}
