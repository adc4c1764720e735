//! Integration Test: Headless Core
//!
//! **Policy**: `splash-core` knows nothing about terminals. Rendering crates
//! belong to `splash-tui`.

use std::fs;

use architectural_enforcement::{assert_clean, scan, workspace_root};

const TERMINAL_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("splash/core/Cargo.toml"))
        .expect("core manifest readable");

    for name in TERMINAL_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(name)),
            "splash-core must not depend on {name}"
        );
    }
}

#[test]
fn test_core_sources_do_not_use_terminal_crates() {
    let violations = scan(&["splash/core/src"], |_, _, code| {
        TERMINAL_CRATES
            .iter()
            .any(|name| code.contains(&format!("{name}::")))
            .then_some("Terminal crate in core")
    });
    assert_clean(&violations, "Terminal crates used in splash-core");
}
