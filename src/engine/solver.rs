// ============================================================================
// Field Solver
// Row-partitioned parallel neighborhood-averaging update over two buffers
// ============================================================================

use crate::engine::partition::{partition_rows, RowRange};
use crate::engine::worker_pool::WorkerPool;
use crate::errors::{FieldError, FieldResult};
use crate::numeric::{FixedValue, NumericResult};
use parking_lot::Mutex;
use std::mem;
use std::time::Instant;

/// Iterative grid solver over a fixed-point element type.
///
/// Owns two equally-shaped row-major buffers: the authoritative current
/// buffer and a shadow buffer written during a step. After every completed
/// step the buffers swap roles; no external aliasing of either buffer is
/// possible while a step runs.
///
/// A step computes, for every cell, the sum of the cell and its existing
/// up/down/left/right neighbors (edge cells have fewer; no wraparound), adds
/// a constant forcing term `gravity * density`, and divides by the count of
/// contributing cells (self plus live neighbors, 1 to 5). The forcing term
/// is deliberately not diluted by that divisor.
#[derive(Debug)]
pub struct FieldSolver<V: FixedValue> {
    width: usize,
    height: usize,
    cells: Vec<V>,
    shadow: Vec<V>,
    pool: Option<WorkerPool>,
}

impl<V: FixedValue> FieldSolver<V> {
    /// Create a solver for a `width` x `height` grid, both cells zeroed.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` when either dimension is zero.
    pub fn new(width: usize, height: usize) -> FieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }

        let cell_count = width * height;
        Ok(Self {
            width,
            height,
            cells: vec![V::default(); cell_count],
            shadow: vec![V::default(); cell_count],
            pool: None,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the current buffer, row-major.
    #[inline]
    pub fn cells(&self) -> &[V] {
        &self.cells
    }

    /// Value of the cell at `(row, col)`.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> V {
        self.cells[row * self.width + col]
    }

    /// Mutable view of the current buffer for the load paths.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [V] {
        &mut self.cells
    }

    /// Populate the current buffer from `values`, row-major.
    ///
    /// The length check precedes any write: on `DimensionMismatch` the
    /// authoritative buffer is left untouched.
    pub fn initialize(&mut self, values: &[V]) -> FieldResult<()> {
        if values.len() != self.cells.len() {
            return Err(FieldError::DimensionMismatch {
                expected: self.cells.len(),
                actual: values.len(),
            });
        }
        self.cells.copy_from_slice(values);
        Ok(())
    }

    /// Advance the field by one step across `workers` parallel workers.
    ///
    /// Rows are divided into contiguous disjoint ranges, the remainder
    /// appended to the last range. Each worker reads the shared current
    /// buffer and writes only its own rows of the shadow buffer; all workers
    /// are joined before the buffers swap, so the swap is a synchronization
    /// point. The worker pool persists across steps and is rebuilt only when
    /// `workers` changes.
    ///
    /// # Errors
    /// Returns `InvalidWorkerCount` for zero workers (never clamped) and
    /// `Numeric` if a worker hits an arithmetic failure, in which case the
    /// buffers are left unspecified.
    pub fn step(&mut self, gravity: f64, density: f64, workers: usize) -> FieldResult<()> {
        if workers == 0 {
            return Err(FieldError::InvalidWorkerCount(0));
        }
        let pool = match self.pool.take() {
            Some(pool) if pool.workers() == workers => pool,
            _ => WorkerPool::new(workers)?,
        };

        let started = Instant::now();
        // the product is formed in real space before conversion
        let forcing = V::from_real(gravity * density);
        let ranges = partition_rows(self.height, workers);

        let width = self.width;
        let height = self.height;
        let cells = &self.cells;
        let first_error: Mutex<Option<FieldError>> = Mutex::new(None);

        pool.scope(|scope| {
            let mut remaining: &mut [V] = &mut self.shadow;
            for range in ranges.iter().copied() {
                let (band, rest) = mem::take(&mut remaining).split_at_mut(range.len() * width);
                remaining = rest;
                let first_error = &first_error;
                scope.spawn(move |_| {
                    if let Err(err) = step_band(cells, band, range, width, height, forcing) {
                        let mut slot = first_error.lock();
                        if slot.is_none() {
                            *slot = Some(err.into());
                        }
                    }
                });
            }
        });
        self.pool = Some(pool);

        if let Some(err) = first_error.into_inner() {
            return Err(err);
        }

        // publish the shadow buffer; the old current buffer becomes scratch
        mem::swap(&mut self.cells, &mut self.shadow);

        tracing::debug!(
            workers,
            elapsed_us = started.elapsed().as_micros() as u64,
            "step completed"
        );
        Ok(())
    }
}

/// Compute one worker's rows of the shadow buffer.
///
/// `band` is the slice of the shadow buffer covering exactly `rows`.
fn step_band<V: FixedValue>(
    cells: &[V],
    band: &mut [V],
    rows: RowRange,
    width: usize,
    height: usize,
    forcing: V,
) -> NumericResult<()> {
    for (band_row, row) in (rows.start..rows.end).enumerate() {
        for col in 0..width {
            let mut sum = cells[row * width + col];
            let mut contributors = 1usize;

            if row > 0 {
                sum = sum + cells[(row - 1) * width + col];
                contributors += 1;
            }
            if row + 1 < height {
                sum = sum + cells[(row + 1) * width + col];
                contributors += 1;
            }
            if col > 0 {
                sum = sum + cells[row * width + col - 1];
                contributors += 1;
            }
            if col + 1 < width {
                sum = sum + cells[row * width + col + 1];
                contributors += 1;
            }

            // the divisor counts self plus live neighbors; the forcing term
            // joins the sum but not the divisor
            let divisor = V::from_real(contributors as f64);
            band[band_row * width + col] = (sum + forcing).div(divisor)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Cell;

    fn cells_of(reals: &[f64]) -> Vec<Cell> {
        reals.iter().map(|&x| Cell::from_real(x)).collect()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            FieldSolver::<Cell>::new(0, 4).unwrap_err(),
            FieldError::InvalidDimensions { width: 0, height: 4 }
        ));
        assert!(matches!(
            FieldSolver::<Cell>::new(4, 0).unwrap_err(),
            FieldError::InvalidDimensions { width: 4, height: 0 }
        ));
    }

    #[test]
    fn test_initialize_length_mismatch_leaves_buffer_untouched() {
        let mut solver = FieldSolver::<Cell>::new(2, 2).unwrap();
        solver.initialize(&cells_of(&[1.0, 2.0, 3.0, 4.0])).unwrap();

        // one value short: width*height - 1
        let err = solver.initialize(&cells_of(&[9.0, 9.0, 9.0])).unwrap_err();
        assert!(matches!(
            err,
            FieldError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
        // prior contents are still observable, no partial write happened
        assert_eq!(solver.cells(), cells_of(&[1.0, 2.0, 3.0, 4.0]).as_slice());
    }

    #[test]
    fn test_single_cell_step_applies_undiluted_forcing() {
        let mut solver = FieldSolver::<Cell>::new(1, 1).unwrap();
        solver.initialize(&cells_of(&[2.0])).unwrap();

        // (value + g*rho) / 1
        solver.step(3.0, 0.5, 1).unwrap();
        assert_eq!(solver.cell(0, 0).to_real(), 3.5);
    }

    #[test]
    fn test_two_by_two_corner_averages() {
        let mut solver = FieldSolver::<Cell>::new(2, 2).unwrap();
        solver.initialize(&cells_of(&[1.0, 2.0, 3.0, 4.0])).unwrap();

        // forcing term zero: every corner averages self + right/left + below/above
        solver.step(0.0, 0.0, 1).unwrap();

        // (1 + 2 + 3) / 3 divides exactly
        assert_eq!(solver.cell(0, 0).to_real(), 2.0);
        // (2 + 1 + 4) / 3 truncates in raw space
        let expected_01 = (Cell::from_real(2.0) + Cell::from_real(1.0) + Cell::from_real(4.0))
            .div(Cell::from_real(3.0))
            .unwrap();
        assert_eq!(solver.cell(0, 1), expected_01);
        let expected_10 = (Cell::from_real(3.0) + Cell::from_real(1.0) + Cell::from_real(4.0))
            .div(Cell::from_real(3.0))
            .unwrap();
        assert_eq!(solver.cell(1, 0), expected_10);
        // (4 + 3 + 2) / 3 divides exactly
        assert_eq!(solver.cell(1, 1).to_real(), 3.0);
    }

    #[test]
    fn test_interior_cell_uses_all_five_contributors() {
        let mut solver = FieldSolver::<Cell>::new(3, 3).unwrap();
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        solver.initialize(&cells_of(&values)).unwrap();

        solver.step(0.0, 0.0, 1).unwrap();

        // center: (5 + 2 + 8 + 4 + 6) / 5 = 5
        assert_eq!(solver.cell(1, 1).to_real(), 5.0);
    }

    #[test]
    fn test_step_rejects_zero_workers() {
        let mut solver = FieldSolver::<Cell>::new(2, 2).unwrap();
        solver.initialize(&cells_of(&[1.0; 4])).unwrap();
        let err = solver.step(0.0, 0.0, 0).unwrap_err();
        assert!(matches!(err, FieldError::InvalidWorkerCount(0)));
    }

    #[test]
    fn test_result_independent_of_worker_count() {
        let values: Vec<f64> = (0..12).map(|i| i as f64 * 0.75 - 3.0).collect();

        let mut serial = FieldSolver::<Cell>::new(3, 4).unwrap();
        serial.initialize(&cells_of(&values)).unwrap();
        serial.step(9.81, 1.25, 1).unwrap();

        // 4 rows over 3 workers exercises the remainder-to-last-worker rule
        let mut parallel = FieldSolver::<Cell>::new(3, 4).unwrap();
        parallel.initialize(&cells_of(&values)).unwrap();
        parallel.step(9.81, 1.25, 3).unwrap();

        assert_eq!(serial.cells(), parallel.cells());
    }

    #[test]
    fn test_more_workers_than_rows() {
        let mut solver = FieldSolver::<Cell>::new(2, 3).unwrap();
        solver.initialize(&cells_of(&[1.0; 6])).unwrap();

        let mut reference = FieldSolver::<Cell>::new(2, 3).unwrap();
        reference.initialize(&cells_of(&[1.0; 6])).unwrap();

        solver.step(1.0, 1.0, 8).unwrap();
        reference.step(1.0, 1.0, 1).unwrap();
        assert_eq!(solver.cells(), reference.cells());
    }

    #[test]
    fn test_repeated_steps_reuse_the_pool() {
        let mut solver = FieldSolver::<Cell>::new(4, 4).unwrap();
        solver.initialize(&cells_of(&[1.0; 16])).unwrap();

        // same worker count across steps keeps one pool; changing it rebuilds
        for _ in 0..3 {
            solver.step(0.5, 2.0, 2).unwrap();
        }
        solver.step(0.5, 2.0, 4).unwrap();

        // uniform field with forcing f stays uniform: each step adds f/count
        // consistently only for the single-cell case, so just sanity-check
        // the buffer stayed finite and uniform by symmetry of the corners
        assert_eq!(solver.cell(0, 0), solver.cell(3, 3));
        assert_eq!(solver.cell(0, 3), solver.cell(3, 0));
    }
}
