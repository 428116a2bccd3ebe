// ============================================================================
// Binary State
// Headerless raw storage dump, row-major, native endianness
// ============================================================================

use crate::engine::FieldSolver;
use crate::errors::FieldResult;
use crate::numeric::FixedValue;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

impl<V: FixedValue> FieldSolver<V> {
    /// Dump the current buffer's raw storage bytes, row by row.
    ///
    /// The format carries no header, no dimensions, and no endianness
    /// normalization: the byte layout is exactly the in-memory layout of the
    /// backing integers. It is only valid for round-tripping against the
    /// same fixed-point instantiation and the same grid dimensions, which
    /// the caller supplies out-of-band.
    pub fn save_state<P: AsRef<Path>>(&self, path: P) -> FieldResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let mut row_bytes = vec![0u8; self.width() * V::RAW_BYTES];
        for row in self.cells().chunks(self.width()) {
            for (value, chunk) in row.iter().zip(row_bytes.chunks_mut(V::RAW_BYTES)) {
                value.store_raw(chunk);
            }
            writer.write_all(&row_bytes)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Rebuild the current buffer from a raw storage dump.
    ///
    /// See [`save_state`](Self::save_state) for the format caveats. A failed
    /// load leaves the buffer partially written; re-initialize before reuse.
    pub fn load_state<P: AsRef<Path>>(&mut self, path: P) -> FieldResult<()> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let width = self.width();
        let mut row_bytes = vec![0u8; width * V::RAW_BYTES];
        for row in self.cells_mut().chunks_mut(width) {
            reader.read_exact(&mut row_bytes)?;
            for (value, chunk) in row.iter_mut().zip(row_bytes.chunks(V::RAW_BYTES)) {
                *value = V::load_raw(chunk);
            }
        }
        Ok(())
    }
}
