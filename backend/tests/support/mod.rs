//! Shared helpers for integration tests that need a real PostgreSQL.
//!
//! Set `SKIP_TEST_CLUSTER=1` to skip these suites where the embedded cluster
//! cannot start; without it a bootstrap failure fails the test.

pub mod pg_embed;

/// Returns true when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report a cluster bootstrap failure: `None` when skipping is allowed,
/// otherwise a panic naming the cause.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("embedded PostgreSQL unavailable: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
