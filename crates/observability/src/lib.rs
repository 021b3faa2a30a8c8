//! Shared tracing/logging setup for marketplace processes and test binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops, so every
/// integration test can call it without coordination.
pub fn init() {
    tracing::init();
}
