//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT sleep. The gate advances on a logical
//! clock fed by `tick(delta)`; pauses are timers, not sleeps.
//!
//! **Allowed**: `tokio::time::interval` for the frame tick in the TUI.

use architectural_enforcement::{assert_clean, scan, PRODUCTION_DIRS};

#[test]
fn test_no_thread_sleep_in_production_code() {
    let violations = scan(PRODUCTION_DIRS, |_, _, code| {
        code.contains("thread::sleep").then_some("Blocking sleep")
    });
    assert_clean(&violations, "Thread sleeps found in production code");
}

#[test]
fn test_core_never_awaits_sleep() {
    // Only the weather timeout may wait on the runtime clock
    let violations = scan(&["splash/core/src"], |_, _, code| {
        code.contains("time::sleep(").then_some("Runtime sleep in core")
    });
    assert_clean(&violations, "Sleeps found in splash-core");
}
