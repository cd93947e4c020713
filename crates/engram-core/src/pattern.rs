//! Pattern grids and their cell encodings.
//!
//! A [`Pattern`] is a square grid of cells holding one of two values. The
//! network is encoding-agnostic: the [`Encoding`] selected at construction
//! decides which two values are legal and what the threshold activation
//! resolves to. Public APIs always speak (row, col) grid coordinates; the
//! flat neuron index space is an implementation detail of the weight store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngramError, EngramResult};

/// Glyph used for the high cell value when rendering or parsing grids.
pub const GLYPH_HI: char = '#';
/// Glyph used for the low cell value when rendering or parsing grids.
pub const GLYPH_LO: char = '.';

/// Cell value domain for patterns and network state.
///
/// `Bipolar` is the classical {-1, +1} formulation and the default; it is
/// the one with the convergence-friendly energy interpretation. `Binary`
/// is the {0, 1} variant, selectable via configuration for callers that
/// deal in plain binary images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Cells in {-1, +1}.
    #[default]
    Bipolar,
    /// Cells in {0, 1}.
    Binary,
}

impl Encoding {
    /// The high cell value (an active neuron).
    pub fn hi(self) -> i8 {
        1
    }

    /// The low cell value (an inactive neuron).
    pub fn lo(self) -> i8 {
        match self {
            Encoding::Bipolar => -1,
            Encoding::Binary => 0,
        }
    }

    /// Whether `value` belongs to this encoding's domain.
    pub fn contains(self, value: i8) -> bool {
        value == self.hi() || value == self.lo()
    }

    /// The opposite cell value. Used to corrupt patterns with noise.
    pub fn invert(self, value: i8) -> i8 {
        if value == self.hi() {
            self.lo()
        } else {
            self.hi()
        }
    }

    /// Hard threshold activation: positive net input activates the neuron,
    /// everything else (including a zero tie) resolves to the low value.
    pub fn activate(self, net: i64) -> i8 {
        if net > 0 {
            self.hi()
        } else {
            self.lo()
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Bipolar => write!(f, "bipolar"),
            Encoding::Binary => write!(f, "binary"),
        }
    }
}

/// A square grid of cells, stored row-major.
///
/// Patterns are plain data: they carry no encoding of their own. Cell
/// values are validated against the network's configured [`Encoding`] at
/// the `train`/`recall` boundary, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    size: usize,
    cells: Vec<i8>,
}

impl Pattern {
    /// Build a pattern from rows of cells.
    ///
    /// The grid must be square: the number of rows fixes the side length
    /// and every row must match it.
    pub fn from_rows(rows: &[Vec<i8>]) -> EngramResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngramError::InvalidSize { size: 0 });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(EngramError::RaggedPattern {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { size, cells })
    }

    /// Build a `size`x`size` pattern with every cell set to `value`.
    pub fn filled(size: usize, value: i8) -> EngramResult<Self> {
        if size == 0 {
            return Err(EngramError::InvalidSize { size: 0 });
        }
        Ok(Self {
            size,
            cells: vec![value; size * size],
        })
    }

    /// Parse a glyph grid: `#` for the encoding's high value, `.` for its
    /// low value, one row per line. Blank lines and surrounding whitespace
    /// are ignored.
    pub fn parse(text: &str, encoding: Encoding) -> EngramResult<Self> {
        let mut rows = Vec::new();
        for (row, line) in text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let mut values = Vec::with_capacity(line.chars().count());
            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    GLYPH_HI => values.push(encoding.hi()),
                    GLYPH_LO => values.push(encoding.lo()),
                    _ => return Err(EngramError::InvalidGlyph { row, col, glyph }),
                }
            }
            rows.push(values);
        }
        Self::from_rows(&rows)
    }

    /// Render the grid as glyph text, the inverse of [`Pattern::parse`].
    ///
    /// Any positive cell renders as `#`, which covers both encodings.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                out.push(if self.get(row, col) > 0 {
                    GLYPH_HI
                } else {
                    GLYPH_LO
                });
            }
            if row + 1 < self.size {
                out.push('\n');
            }
        }
        out
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (row, col).
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i8 {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col]
    }

    /// Overwrite the cell at (row, col).
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i8) {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col] = value;
    }

    /// Number of cells where `self` and `other` differ.
    ///
    /// # Panics
    /// Panics if the patterns have different sizes.
    pub fn hamming(&self, other: &Pattern) -> usize {
        assert_eq!(
            self.size, other.size,
            "hamming distance requires equal-size patterns"
        );
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Row-major cell slice; indices line up with the weight store's flat
    /// neuron index space.
    pub(crate) fn as_slice(&self) -> &[i8] {
        &self.cells
    }

    /// Mutable row-major cell slice for in-place relaxation.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [i8] {
        &mut self.cells
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
