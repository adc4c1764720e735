//! Integration Test: Panic Prohibition
//!
//! **Policy**: Production code propagates errors or falls back. `unwrap()`
//! and `expect()` are for tests only.

use architectural_enforcement::{assert_clean, scan, PRODUCTION_DIRS};

#[test]
fn test_no_unwrap_or_expect_in_production_code() {
    let violations = scan(PRODUCTION_DIRS, |_, _, code| {
        (code.contains(".unwrap()") || code.contains(".expect(")).then_some("Panicking accessor")
    });
    assert_clean(&violations, "unwrap()/expect() found in production code");
}
