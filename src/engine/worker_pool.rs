// ============================================================================
// Worker Pool
// Persistent fixed-size pool backing the row-partitioned step fan-out
// ============================================================================

use crate::errors::{FieldError, FieldResult};
use std::fmt;

/// Fixed-size thread pool reused across steps.
///
/// Threads are created once per pool, not once per step; the solver keeps a
/// pool alive as long as the requested worker count stays the same.
pub struct WorkerPool {
    workers: usize,
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Create a pool with exactly `workers` threads.
    ///
    /// # Errors
    /// Returns `InvalidWorkerCount` for zero workers and `WorkerPool` when
    /// the underlying threads cannot be spawned.
    pub fn new(workers: usize) -> FieldResult<Self> {
        if workers == 0 {
            return Err(FieldError::InvalidWorkerCount(0));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("field-worker-{index}"))
            .build()
            .map_err(|err| FieldError::WorkerPool(err.to_string()))?;

        tracing::debug!(workers, "worker pool created");
        Ok(Self { workers, pool })
    }

    /// Number of worker threads in the pool.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run a scoped fan-out on the pool, blocking until every spawned task
    /// completes.
    pub(crate) fn scope<'scope, OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce(&rayon::Scope<'scope>) -> R + Send,
        R: Send,
    {
        self.pool.scope(op)
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.workers)
            .finish()
    }
}
