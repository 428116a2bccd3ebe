// ============================================================================
// Field Engine Library
// Deterministic fixed-point field relaxation with parallel row-partitioned steps
// ============================================================================

//! # Field Engine
//!
//! An iterative, discretized field simulation over a deterministic
//! fixed-point numeric representation.
//!
//! ## Features
//!
//! - **Fixed-point cells** with truncating real↔fixed conversion; results
//!   are bit-exact across machines and worker counts
//! - **Checked and fast storage policies** (`Fixed32`/`Fixed64` vs
//!   `FastFixed32`/`FastFixed64`) over the same arithmetic
//! - **Row-partitioned parallel stepping** on a persistent worker pool,
//!   remainder rows owned by the last worker
//! - **Text snapshots and headerless binary state** operating directly on
//!   the raw fixed-point layout
//!
//! ## Example
//!
//! ```rust
//! use field_engine::prelude::*;
//!
//! let input = SimulationInput::read_from(
//!     "2 2  9.81 1.0  1 2 3 4".as_bytes(),
//! ).unwrap();
//!
//! let mut solver = FieldSolver::<Cell>::new(input.width, input.height).unwrap();
//! solver.initialize(&input.fixed_values::<Cell>()).unwrap();
//!
//! solver.step(input.gravity, input.density, default_worker_count()).unwrap();
//! println!("cell (0,0) is now {}", solver.cell(0, 0));
//! ```

pub mod domain;
pub mod engine;
pub mod errors;
pub mod numeric;
pub mod persistence;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::SimulationInput;
    pub use crate::engine::{partition_rows, FieldSolver, RowRange, WorkerPool};
    pub use crate::errors::{FieldError, FieldResult};
    pub use crate::numeric::{
        Cell, FastCell, FastFixed32, FastFixed64, Fixed32, Fixed64, FixedValue,
    };
    pub use crate::utils::default_worker_count;
}
