// ============================================================================
// Row Partitioning
// Contiguous, disjoint row ranges with the remainder on the last worker
// ============================================================================

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open range of grid rows owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowRange {
    /// First row of the range
    pub start: usize,
    /// One past the last row of the range
    pub end: usize,
}

impl RowRange {
    /// Number of rows in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range holds no rows (possible when workers outnumber rows).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Divide `height` rows among `workers` contiguous, non-overlapping ranges.
///
/// Each of the first `workers` ranges gets `height / workers` rows; the
/// entire remainder `height % workers` is appended to the LAST range, not
/// distributed one-per-worker. When workers outnumber rows, the leading
/// ranges are empty and the last range holds every row.
///
/// `workers` must be positive; callers validate before partitioning.
pub fn partition_rows(height: usize, workers: usize) -> SmallVec<[RowRange; 8]> {
    debug_assert!(workers > 0, "worker count must be positive");

    let rows_per_worker = height / workers;
    let remainder = height % workers;

    let mut ranges = SmallVec::with_capacity(workers);
    for worker in 0..workers {
        let start = worker * rows_per_worker;
        let end = if worker == workers - 1 {
            start + rows_per_worker + remainder
        } else {
            start + rows_per_worker
        };
        ranges.push(RowRange { start, end });
    }
    ranges
}
