//! Structural tests for layer boundary enforcement.
//!
//! These tests scan source files so that the pure layers stay free of I/O
//! and the inner layers never reach outward.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

fn src(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(layer)
}

/// Every `(file, line)` in `layer` that mentions one of `forbidden`.
fn violations(layer: &str, forbidden: &[&str]) -> Vec<String> {
    let files = collect_rs_files(&src(layer));
    assert!(!files.is_empty(), "no sources found for {layer}");
    let mut found = Vec::new();
    for file in files {
        for line in read_non_comment_lines(&file) {
            if forbidden.iter().any(|f| line.contains(f)) {
                found.push(format!("{}: {}", file.display(), line.trim()));
            }
        }
    }
    found
}

#[test]
fn test_domain_has_no_io_or_runtime_imports() {
    let found = violations(
        "domain",
        &[
            "tokio",
            "reqwest",
            "ratatui",
            "crossterm",
            "std::process",
            "std::fs",
            "std::net",
            "crate::infra",
            "crate::application",
            "crate::tui",
            "crate::commands",
            "crate::output",
        ],
    );
    assert!(found.is_empty(), "domain layer violations:\n{}", found.join("\n"));
}

#[test]
fn test_application_depends_only_on_domain() {
    let found = violations(
        "application",
        &[
            "crate::infra",
            "crate::tui",
            "crate::commands",
            "crate::output",
            "reqwest",
            "ratatui",
            "crossterm",
        ],
    );
    assert!(
        found.is_empty(),
        "application layer violations:\n{}",
        found.join("\n")
    );
}

#[test]
fn test_infra_does_not_reach_presentation() {
    let found = violations("infra", &["crate::tui", "crate::commands", "crate::output"]);
    assert!(found.is_empty(), "infra layer violations:\n{}", found.join("\n"));
}

#[test]
fn test_tui_does_not_touch_infra() {
    let found = violations("tui", &["crate::infra", "crate::commands", "reqwest"]);
    assert!(found.is_empty(), "tui layer violations:\n{}", found.join("\n"));
}
