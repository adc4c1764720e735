//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Async code MUST NOT block. The weather fetch uses async reqwest;
//! file reads are only acceptable in non-async functions (config loading and
//! log setup, both before the event loop starts).

use architectural_enforcement::{assert_clean, in_async_fn, scan, PRODUCTION_DIRS};

#[test]
fn test_no_blocking_http_client() {
    let violations = scan(PRODUCTION_DIRS, |_, _, code| {
        code.contains("reqwest::blocking").then_some("Blocking HTTP client")
    });
    assert_clean(&violations, "Blocking HTTP client found");
}

#[test]
fn test_no_blocking_network_io() {
    let violations = scan(PRODUCTION_DIRS, |_, _, code| {
        (code.contains("std::net::") || code.contains("use std::net"))
            .then_some("Blocking network I/O")
    });
    assert_clean(&violations, "Blocking network I/O found");
}

#[test]
fn test_no_blocking_file_io_in_async_functions() {
    let violations = scan(PRODUCTION_DIRS, |lines, idx, code| {
        let blocking = code.contains("fs::read")
            || code.contains("fs::write")
            || code.contains("File::open")
            || code.contains("File::create");
        (blocking && !code.contains("tokio::fs") && in_async_fn(lines, idx))
            .then_some("Blocking file I/O in async fn")
    });
    assert_clean(&violations, "Blocking file I/O found in async code");
}
