// ============================================================================
// Utilities Module
// Helper functions shared by drivers
// ============================================================================

mod concurrency;

pub use concurrency::{default_worker_count, FALLBACK_WORKER_COUNT};
