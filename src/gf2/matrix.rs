//! Dense binary matrices.
//!
//! Only the handful of operations the parity-check construction needs:
//! building from columns, transpose, row-vector products and matrix
//! products, all with GF(2) arithmetic (AND for multiply, XOR for add).

use super::bits::BitVector;
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// A binary matrix stored as a list of equal-length rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    /// Number of columns, kept explicitly so a matrix with zero rows still has a width
    cols: usize,
    /// Row vectors, each `cols` bits long
    rows: Vec<BitVector>,
}

impl BitMatrix {
    /// Creates an all-zero `rows` × `cols` matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BitMatrix {
            cols,
            rows: vec![BitVector::zeros(cols); rows],
        }
    }

    /// Builds a matrix from column vectors
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the columns differ in length
    pub fn from_columns(columns: &[BitVector]) -> Result<Self> {
        let height = columns.first().map_or(0, BitVector::len);
        let mut matrix = Self::zeros(height, columns.len());
        for (c, column) in columns.iter().enumerate() {
            if column.len() != height {
                return Err(Error::LengthMismatch {
                    expected: height,
                    actual: column.len(),
                });
            }
            for r in column.ones() {
                matrix.set(r, c, true);
            }
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Entry at (`row`, `col`)
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].bit(col)
    }

    /// Sets the entry at (`row`, `col`)
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set(col, value);
    }

    /// Copies out a column
    pub fn column(&self, col: usize) -> BitVector {
        self.rows.iter().map(|row| row.bit(col)).collect()
    }

    /// Iterates over the columns from left to right
    pub fn columns(&self) -> impl Iterator<Item = BitVector> + '_ {
        (0..self.cols).map(move |col| self.column(col))
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        BitMatrix {
            cols: self.rows.len(),
            rows: self.columns().collect(),
        }
    }

    /// Row vector times matrix: XOR of the rows selected by the set bits of `vector`
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `vector` is not `row_count()` bits long
    pub fn vector_mul(&self, vector: &BitVector) -> Result<BitVector> {
        if vector.len() != self.row_count() {
            return Err(Error::LengthMismatch {
                expected: self.row_count(),
                actual: vector.len(),
            });
        }

        let mut result = BitVector::zeros(self.cols);
        for i in vector.ones() {
            for j in self.rows[i].ones() {
                result.flip(j);
            }
        }
        Ok(result)
    }

    /// Matrix product `self · other`
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the inner dimensions differ
    pub fn mul(&self, other: &BitMatrix) -> Result<Self> {
        let rows = self
            .rows
            .iter()
            .map(|row| other.vector_mul(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(BitMatrix {
            cols: other.cols,
            rows,
        })
    }

    /// Whether every entry is zero
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(BitVector::is_zero)
    }
}

impl Display for BitMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
