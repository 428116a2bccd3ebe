// ============================================================================
// Concurrency Helpers
// Worker-count auto-detection for drivers
// ============================================================================

/// Worker count used when parallelism detection fails.
pub const FALLBACK_WORKER_COUNT: usize = 4;

/// Detect a reasonable worker count for stepping.
///
/// Uses the machine's available parallelism, falling back to
/// [`FALLBACK_WORKER_COUNT`] when detection is unavailable.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(FALLBACK_WORKER_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_worker_count_is_positive() {
        assert!(default_worker_count() > 0);
    }
}
