//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce the workspace's
//! architectural rules:
//! - No thread sleeps in production code (the gate runs on a logical clock)
//! - No blocking network or HTTP I/O
//! - No `unwrap()` / `expect()` outside tests
//! - `splash-core` stays headless (no terminal crates)
//!
//! The helpers here scan source files line by line. Everything from the first
//! `#[cfg(test)]` in a file onward is treated as test code.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Source directories holding production code
pub const PRODUCTION_DIRS: &[&str] = &["splash/core/src", "tui/src"];

/// A rule broken at one line
#[derive(Debug, Clone)]
pub struct Violation {
    /// File the line lives in
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
    /// What rule it breaks
    pub reason: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} - {}: {}",
            self.path.display(),
            self.line,
            self.reason,
            self.text
        )
    }
}

/// Workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// All `.rs` files under `dir`, relative to the workspace root
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Production lines of a file as `(index, code)`, comments stripped
///
/// Stops at the first `#[cfg(test)]`. Doc and line comments are dropped.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter_map(|(idx, line)| {
            let code = line.split("//").next().unwrap_or(line);
            (!code.trim().is_empty()).then_some((idx, code))
        })
        .collect()
}

/// Whether the function enclosing line `idx` is `async`
pub fn in_async_fn(lines: &[&str], idx: usize) -> bool {
    for line in lines[..=idx].iter().rev() {
        let line = line.trim();
        if line.contains("async fn ") {
            return true;
        }
        if line.contains("fn ") {
            return false;
        }
    }
    false
}

/// Run `check` over every production line in `dirs`
///
/// `check` gets the whole file and the line index, and returns the rule
/// name when the line breaks it.
pub fn scan<F>(dirs: &[&str], check: F) -> Vec<Violation>
where
    F: Fn(&[&str], usize, &str) -> Option<&'static str>,
{
    let mut violations = Vec::new();

    for dir in dirs {
        for path in rust_files(dir) {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            let all: Vec<&str> = content.lines().collect();

            for (idx, code) in production_lines(&content) {
                if let Some(reason) = check(&all, idx, code) {
                    violations.push(Violation {
                        path: path.clone(),
                        line: idx + 1,
                        text: all[idx].trim().to_string(),
                        reason,
                    });
                }
            }
        }
    }

    violations
}

/// Print violations and fail the test when there are any
pub fn assert_clean(violations: &[Violation], rule: &str) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n❌ {rule}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!("\nFound {} violation(s). Fix these before merging!", violations.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let content = "fn a() {}\n// note\n#[cfg(test)]\nmod tests { fn b() { x.unwrap(); } }\n";
        let lines = production_lines(content);
        assert_eq!(lines, vec![(0, "fn a() {}")]);
    }

    #[test]
    fn test_in_async_fn() {
        let lines = ["async fn run() {", "    work();", "}", "fn sync() {", "    work();"];
        assert!(in_async_fn(&lines, 1));
        assert!(!in_async_fn(&lines, 4));
    }

    #[test]
    fn test_workspace_root_has_members() {
        assert!(workspace_root().join("splash/core/Cargo.toml").exists());
        assert!(!rust_files("tui/src").is_empty());
    }
}
