// ============================================================================
// Simulation Input Description
// Whitespace-token text description of dimensions, parameters, and values
// ============================================================================

use crate::errors::{FieldError, FieldResult};
use crate::numeric::FixedValue;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parsed simulation input: grid dimensions, physical parameters, and the
/// flat row-major initial values.
///
/// The text format is a single whitespace-delimited stream:
///
/// ```text
/// width height gravity density v0 v1 ... v(width*height-1)
/// ```
///
/// Constructed once from the external description, consumed once to
/// initialize a solver, then discarded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationInput {
    /// Grid width in cells (positive)
    pub width: usize,
    /// Grid height in cells (positive)
    pub height: usize,
    /// Gravity parameter `g`
    pub gravity: f64,
    /// Density parameter `rho`
    pub density: f64,
    /// `width * height` initial cell values, row-major
    pub initial_values: Vec<f64>,
}

impl SimulationInput {
    /// Parse an input description from a reader.
    ///
    /// Every violation fails before any simulation state is constructed:
    /// non-positive dimensions, unparseable numbers, and short input all
    /// surface as descriptive errors.
    pub fn read_from<R: Read>(mut reader: R) -> FieldResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let width = parse_integer(&mut tokens, "width")?;
        let height = parse_integer(&mut tokens, "height")?;
        if width <= 0 || height <= 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }

        let gravity = parse_real(&mut tokens, "gravity")?;
        let density = parse_real(&mut tokens, "density")?;
        if gravity <= 0.0 {
            tracing::warn!(gravity, "non-positive gravity in input description");
        }

        let cell_count = width as usize * height as usize;
        let mut initial_values = Vec::with_capacity(cell_count);
        for index in 0..cell_count {
            let value = parse_real(&mut tokens, "initial value")
                .map_err(|_| FieldError::Parse {
                    what: format!("initial value {index} of {cell_count}"),
                })?;
            initial_values.push(value);
        }

        tracing::debug!(
            width,
            height,
            gravity,
            density,
            "loaded simulation input description"
        );

        Ok(Self {
            width: width as usize,
            height: height as usize,
            gravity,
            density,
            initial_values,
        })
    }

    /// Parse an input description from a file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> FieldResult<Self> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert the initial values into fixed-point form for `initialize`.
    pub fn fixed_values<V: FixedValue>(&self) -> Vec<V> {
        self.initial_values.iter().map(|&x| V::from_real(x)).collect()
    }
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> FieldResult<&'a str> {
    tokens.next().ok_or_else(|| FieldError::Parse {
        what: format!("unexpected end of input while reading {what}"),
    })
}

fn parse_integer<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> FieldResult<i64> {
    let token = next_token(tokens, what)?;
    token.parse().map_err(|_| FieldError::Parse {
        what: format!("{what}: {token:?} is not an integer"),
    })
}

fn parse_real<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> FieldResult<f64> {
    let token = next_token(tokens, what)?;
    token.parse().map_err(|_| FieldError::Parse {
        what: format!("{what}: {token:?} is not a number"),
    })
}
