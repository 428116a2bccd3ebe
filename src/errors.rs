// ============================================================================
// Engine Errors
// Crate-level error taxonomy for input, solver, and persistence failures
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;
use std::io;

/// Errors surfaced by the input reader, the grid solver, and persistence.
///
/// All failures propagate immediately to the caller; nothing is retried or
/// silently recovered. A failed `initialize` performs no buffer writes; a
/// failed `step` or `load` leaves buffer contents unspecified and the solver
/// must be re-initialized before further use.
#[derive(Debug)]
pub enum FieldError {
    /// File could not be opened, read, or written
    Io(io::Error),
    /// Malformed numeric input
    Parse {
        /// What was being parsed when the failure occurred
        what: String,
    },
    /// Supplied value count does not match the declared grid dimensions
    DimensionMismatch { expected: usize, actual: usize },
    /// Declared grid dimensions are non-positive
    InvalidDimensions { width: i64, height: i64 },
    /// A step was requested with zero workers
    InvalidWorkerCount(usize),
    /// Fixed-point arithmetic failure inside a step
    Numeric(NumericError),
    /// Worker pool could not be constructed
    WorkerPool(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Io(err) => write!(f, "i/o failure: {err}"),
            FieldError::Parse { what } => write!(f, "parse failure: {what}"),
            FieldError::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {expected} values, got {actual}"
            ),
            FieldError::InvalidDimensions { width, height } => write!(
                f,
                "invalid dimensions: width and height must be positive, got {width}x{height}"
            ),
            FieldError::InvalidWorkerCount(count) => {
                write!(f, "invalid worker count: {count}")
            }
            FieldError::Numeric(err) => write!(f, "numeric failure: {err}"),
            FieldError::WorkerPool(reason) => {
                write!(f, "worker pool construction failed: {reason}")
            }
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FieldError::Io(err) => Some(err),
            FieldError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FieldError {
    fn from(err: io::Error) -> Self {
        FieldError::Io(err)
    }
}

impl From<NumericError> for FieldError {
    fn from(err: NumericError) -> Self {
        FieldError::Numeric(err)
    }
}

/// Result type alias for engine operations
pub type FieldResult<T> = Result<T, FieldError>;
