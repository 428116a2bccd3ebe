// ============================================================================
// Engine Module
// Grid solver, row partitioning, and the persistent worker pool
// ============================================================================

mod partition;
mod solver;
mod worker_pool;

pub use partition::{partition_rows, RowRange};
pub use solver::FieldSolver;
pub use worker_pool::WorkerPool;
