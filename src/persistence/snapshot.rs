// ============================================================================
// Text Snapshots
// Row-major whitespace-separated real values, one row per line
// ============================================================================

use crate::engine::FieldSolver;
use crate::errors::{FieldError, FieldResult};
use crate::numeric::FixedValue;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

impl<V: FixedValue> FieldSolver<V> {
    /// Write the current buffer as a text snapshot.
    ///
    /// Every cell renders its real value, whitespace-separated, one grid row
    /// per line.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> FieldResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for row in self.cells().chunks(self.width()) {
            for value in row {
                write!(writer, "{} ", value)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Fill the current buffer from a text snapshot.
    ///
    /// Reads `width * height` real numbers through the truncating
    /// constructor; tokens beyond that count are ignored. A failed load
    /// leaves the buffer partially written; re-initialize before reuse.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> FieldResult<()> {
        let mut text = String::new();
        File::open(path)?.read_to_string(&mut text)?;

        let expected = self.width() * self.height();
        let mut tokens = text.split_whitespace();
        let cells = self.cells_mut();
        for index in 0..expected {
            let token = tokens.next().ok_or_else(|| FieldError::Parse {
                what: format!("unexpected end of snapshot at value {index} of {expected}"),
            })?;
            cells[index] = token.parse().map_err(|_| FieldError::Parse {
                what: format!("snapshot value {index}: {token:?} is not a number"),
            })?;
        }
        Ok(())
    }
}
